//! WarmingEngine: decides what to prefetch and drives the bounded scheduler.
//!
//! The single public entry point of the warming subsystem. Constructed once
//! with its collaborators and passed by reference to consumers; at most one
//! warming pass runs per engine at any time.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, Timelike};
use tracing::{debug, info};

use stoker_core::traits::{KeyValueStore, Prefetcher};
use stoker_core::{
    MemberRole, UserPattern, WarmTarget, WarmingConfig, WarmingConfigPatch, WarmingStats,
};
use stoker_prediction::{SequenceStrategy, TemporalStrategy};
use stoker_store::PatternStore;

use crate::queue::WarmingTask;
use crate::scheduler::BoundedScheduler;

/// Resets the warming flag when the pass ends, on every exit path.
struct WarmingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for WarmingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// The cache-warming orchestrator.
///
/// Records navigation into the per-user pattern store, predicts what the
/// user needs next, and prefetches it through the external cache layer.
/// Every public method absorbs its own failures: nothing here returns an
/// error to a caller.
pub struct WarmingEngine<K: KeyValueStore + 'static> {
    prefetcher: Arc<dyn Prefetcher>,
    store: Arc<PatternStore<K>>,
    pattern: Mutex<UserPattern>,
    config: Mutex<WarmingConfig>,
    /// Guard: only one warming pass can run at a time.
    is_warming: AtomicBool,
    scheduler: BoundedScheduler,
    last_queue_len: AtomicUsize,
    completed_tasks: AtomicU64,
    failed_tasks: AtomicU64,
}

impl<K: KeyValueStore + 'static> WarmingEngine<K> {
    /// Create an engine and load the configured user's stored patterns.
    pub async fn new(prefetcher: Arc<dyn Prefetcher>, kv: K, config: WarmingConfig) -> Self {
        let store = Arc::new(PatternStore::new(kv));
        let pattern = store.load(&config.user_id).await;
        Self {
            prefetcher,
            store,
            pattern: Mutex::new(pattern),
            config: Mutex::new(config),
            is_warming: AtomicBool::new(false),
            scheduler: BoundedScheduler::new(),
            last_queue_len: AtomicUsize::new(0),
            completed_tasks: AtomicU64::new(0),
            failed_tasks: AtomicU64::new(0),
        }
    }

    // A poisoned lock still holds usable data; recover the guard.
    fn lock_pattern(&self) -> MutexGuard<'_, UserPattern> {
        self.pattern.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_config(&self) -> MutexGuard<'_, WarmingConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one warming pass, prefetching what the user likely needs next.
    ///
    /// A silent no-op when warming is disabled or a pass is already in
    /// flight (the call is dropped, not queued). Resolves once every
    /// launched task has settled; individual failures never surface here.
    pub async fn warm_cache(&self, current_screen: Option<&str>) {
        let config = self.lock_config().clone();
        if !config.enabled {
            debug!("cache warming disabled, skipping pass");
            return;
        }

        // At most one pass per engine.
        if self
            .is_warming
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("warming pass already in flight, skipping");
            return;
        }
        let _guard = WarmingGuard {
            flag: &self.is_warming,
        };

        let pattern = self.lock_pattern().clone();
        let hour = Local::now().hour();
        let tasks = self.build_tasks(&config, &pattern, current_screen, hour);
        self.last_queue_len.store(tasks.len(), Ordering::Relaxed);
        debug!(queued = tasks.len(), screen = ?current_screen, "constructed warming queue");

        let outcome = self.scheduler.drain(tasks).await;
        self.completed_tasks
            .fetch_add(outcome.completed as u64, Ordering::Relaxed);
        self.failed_tasks
            .fetch_add(outcome.failed as u64, Ordering::Relaxed);
        info!(
            completed = outcome.completed,
            failed = outcome.failed,
            "warming pass finished"
        );
    }

    /// Build the task list for one pass.
    ///
    /// Priorities are fixed so essential data always outranks predicted
    /// data. Construction order is irrelevant; the scheduler re-sorts.
    fn build_tasks(
        &self,
        config: &WarmingConfig,
        pattern: &UserPattern,
        current_screen: Option<&str>,
        hour: u32,
    ) -> Vec<WarmingTask> {
        let mut tasks = Vec::new();

        // Step 1: essential data, warmed on every pass.
        self.push_task(&mut tasks, 10, WarmTarget::UserProfile, config);
        self.push_task(&mut tasks, 9, WarmTarget::UserRole, config);
        self.push_task(&mut tasks, 8, WarmTarget::OrgContext, config);

        // Step 2: screens predicted to follow the current one.
        if let Some(screen) = current_screen {
            let predicted = SequenceStrategy::predict(pattern, screen);
            for (rank, prediction) in predicted.iter().enumerate() {
                if let Some(target) = WarmTarget::from_screen_name(&prediction.screen, config.role)
                {
                    self.push_task(&mut tasks, 7 - rank as u8, target, config);
                }
            }
        }

        // Step 3: screens the user favors at this hour.
        let temporal = TemporalStrategy::predict(pattern, hour);
        for (rank, prediction) in temporal.iter().enumerate() {
            if let Some(target) =
                WarmTarget::from_screen_name_restricted(&prediction.screen, config.role)
            {
                self.push_task(&mut tasks, 5 - rank as u8, target, config);
            }
        }

        // Step 4: the role-specific warming set.
        match config.role {
            MemberRole::Member => {
                self.push_task(&mut tasks, 6, WarmTarget::MemberDashboard, config);
                self.push_task(&mut tasks, 5, WarmTarget::PersonalHoursStats, config);
            }
            MemberRole::Officer => {
                self.push_task(&mut tasks, 6, WarmTarget::OfficerDashboard, config);
                self.push_task(&mut tasks, 5, WarmTarget::PendingHours, config);
                self.push_task(&mut tasks, 4, WarmTarget::OrgMembers, config);
            }
        }

        tasks
    }

    fn push_task(
        &self,
        tasks: &mut Vec<WarmingTask>,
        priority: u8,
        target: WarmTarget,
        config: &WarmingConfig,
    ) {
        let prefetcher = Arc::clone(&self.prefetcher);
        let key = target.cache_key(config);
        let policy = target.policy();
        tasks.push(WarmingTask::new(priority, target, async move {
            prefetcher.prefetch(key, policy).await
        }));
    }

    /// Record a screen visit. Persistence happens in the background.
    pub fn record_screen_visit(&self, screen: &str) {
        let hour = Local::now().hour();
        let snapshot = {
            let mut pattern = self.lock_pattern();
            pattern.record_visit(screen, hour);
            pattern.clone()
        };
        self.persist(snapshot);
    }

    /// Record a completed navigation sequence. Same persistence contract.
    pub fn record_navigation_sequence(&self, sequence: Vec<String>) {
        let snapshot = {
            let mut pattern = self.lock_pattern();
            pattern.record_sequence(sequence);
            pattern.clone()
        };
        self.persist(snapshot);
    }

    // Fire-and-forget save of a pattern snapshot. Save failures are logged
    // inside the store; the in-memory pattern stays authoritative.
    fn persist(&self, snapshot: UserPattern) {
        let store = Arc::clone(&self.store);
        let user_id = self.lock_config().user_id.clone();
        tokio::spawn(async move {
            store.save(&user_id, &snapshot).await;
        });
    }

    /// Erase persisted and in-memory pattern state for the current user.
    pub async fn clear_user_patterns(&self) {
        let user_id = self.lock_config().user_id.clone();
        *self.lock_pattern() = UserPattern::default();
        self.store.clear(&user_id).await;
        info!(%user_id, "cleared user patterns");
    }

    /// Merge a config patch. A user change reloads that user's patterns.
    pub async fn update_config(&self, patch: WarmingConfigPatch) {
        let (user_changed, user_id) = {
            let mut config = self.lock_config();
            let previous = config.user_id.clone();
            config.apply(patch);
            (config.user_id != previous, config.user_id.clone())
        };

        if user_changed {
            let loaded = self.store.load(&user_id).await;
            *self.lock_pattern() = loaded;
            debug!(%user_id, "reloaded patterns for new user");
        }
    }

    /// Read-only snapshot of engine state.
    pub fn stats(&self) -> WarmingStats {
        WarmingStats {
            is_warming: self.is_warming.load(Ordering::Relaxed),
            queue_length: self.last_queue_len.load(Ordering::Relaxed),
            completed_tasks: self.completed_tasks.load(Ordering::Relaxed),
            failed_tasks: self.failed_tasks.load(Ordering::Relaxed),
            user_patterns: self.lock_pattern().clone(),
            config: self.lock_config().clone(),
        }
    }
}
