use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use stoker_core::errors::{PrefetchError, PrefetchResult};
use stoker_core::traits::Prefetcher;
use stoker_core::{CacheKey, CachePolicy, MemberRole, UserPattern, WarmingConfig, WarmingConfigPatch};
use stoker_store::{MemoryKeyValueStore, PatternStore};
use stoker_warming::WarmingEngine;

// ── Mock prefetch layer ───────────────────────────────────────────────────

#[derive(Default)]
struct MockPrefetcher {
    calls: Mutex<Vec<(CacheKey, CachePolicy)>>,
    delay: Option<Duration>,
    fail_resource: Option<&'static str>,
}

impl MockPrefetcher {
    fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    fn failing_on(resource: &'static str) -> Self {
        Self {
            fail_resource: Some(resource),
            ..Default::default()
        }
    }

    fn resources(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.resource.clone())
            .collect()
    }
}

#[async_trait]
impl Prefetcher for MockPrefetcher {
    async fn prefetch(&self, key: CacheKey, policy: CachePolicy) -> PrefetchResult<()> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        if self.fail_resource == Some(key.resource.as_str()) {
            return Err(PrefetchError::Failed {
                key: key.to_string(),
                message: "remote call rejected".to_string(),
            });
        }
        self.calls.lock().unwrap().push((key, policy));
        Ok(())
    }
}

fn member_config() -> WarmingConfig {
    WarmingConfig {
        user_id: "u1".to_string(),
        ..Default::default()
    }
}

async fn engine_over(
    prefetcher: Arc<MockPrefetcher>,
    config: WarmingConfig,
) -> WarmingEngine<Arc<MemoryKeyValueStore>> {
    WarmingEngine::new(prefetcher, Arc::new(MemoryKeyValueStore::new()), config).await
}

// ── Warming passes ────────────────────────────────────────────────────────

#[tokio::test]
async fn member_pass_warms_essentials_and_role_set() {
    let prefetcher = Arc::new(MockPrefetcher::default());
    let engine = engine_over(Arc::clone(&prefetcher), member_config()).await;

    engine.warm_cache(None).await;

    let mut resources = prefetcher.resources();
    resources.sort();
    assert_eq!(
        resources,
        vec![
            "member_dashboard",
            "org_context",
            "personal_hours_stats",
            "user_profile",
            "user_role",
        ]
    );

    let stats = engine.stats();
    assert!(!stats.is_warming);
    assert_eq!(stats.queue_length, 5);
    assert_eq!(stats.completed_tasks, 5);
    assert_eq!(stats.failed_tasks, 0);
}

#[tokio::test]
async fn officer_pass_adds_the_officer_set() {
    let prefetcher = Arc::new(MockPrefetcher::default());
    let config = WarmingConfig {
        user_id: "u1".to_string(),
        role: MemberRole::Officer,
        ..Default::default()
    };
    let engine = engine_over(Arc::clone(&prefetcher), config).await;

    engine.warm_cache(None).await;

    let resources = prefetcher.resources();
    assert!(resources.contains(&"officer_dashboard".to_string()));
    assert!(resources.contains(&"pending_hours".to_string()));
    assert!(resources.contains(&"org_members".to_string()));
    assert_eq!(resources.len(), 6);
}

#[tokio::test]
async fn screen_hint_adds_pattern_predicted_tasks() {
    let prefetcher = Arc::new(MockPrefetcher::default());
    let engine = engine_over(Arc::clone(&prefetcher), member_config()).await;
    engine.record_navigation_sequence(vec![
        "Home".to_string(),
        "Events".to_string(),
        "VolunteerHours".to_string(),
    ]);

    engine.warm_cache(Some("Events")).await;

    // Essentials + member set + one pattern prediction.
    assert_eq!(prefetcher.resources().len(), 6);
    assert!(prefetcher
        .resources()
        .contains(&"volunteer_hours".to_string()));
}

#[tokio::test]
async fn second_call_during_pass_is_a_silent_noop() {
    let prefetcher = Arc::new(MockPrefetcher::with_delay(Duration::from_millis(20)));
    let engine = engine_over(Arc::clone(&prefetcher), member_config()).await;

    let (_, mid_pass_warming) = tokio::join!(engine.warm_cache(None), async {
        sleep(Duration::from_millis(5)).await;
        let was_warming = engine.stats().is_warming;
        // Overlapping call: dropped, not queued.
        engine.warm_cache(None).await;
        was_warming
    });

    assert!(mid_pass_warming);
    // Exactly one batch of tasks ran.
    assert_eq!(prefetcher.resources().len(), 5);
    assert!(!engine.stats().is_warming);
}

#[tokio::test]
async fn disabled_engine_never_prefetches() {
    let prefetcher = Arc::new(MockPrefetcher::default());
    let config = WarmingConfig {
        user_id: "u1".to_string(),
        enabled: false,
        ..Default::default()
    };
    let engine = engine_over(Arc::clone(&prefetcher), config).await;

    engine.warm_cache(Some("Events")).await;

    assert!(prefetcher.resources().is_empty());
    assert_eq!(engine.stats().queue_length, 0);
}

#[tokio::test]
async fn task_failures_are_counted_never_surfaced() {
    let prefetcher = Arc::new(MockPrefetcher::failing_on("user_role"));
    let engine = engine_over(Arc::clone(&prefetcher), member_config()).await;

    engine.warm_cache(None).await;

    let stats = engine.stats();
    assert_eq!(stats.completed_tasks, 4);
    assert_eq!(stats.failed_tasks, 1);
    assert_eq!(prefetcher.resources().len(), 4);
}

// ── Recording and persistence ─────────────────────────────────────────────

#[tokio::test]
async fn screen_visits_persist_in_the_background() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let engine = WarmingEngine::new(
        Arc::new(MockPrefetcher::default()),
        Arc::clone(&kv),
        member_config(),
    )
    .await;

    engine.record_screen_visit("Dashboard");
    engine.record_screen_visit("Dashboard");
    sleep(Duration::from_millis(20)).await;

    let persisted = PatternStore::new(kv).load("u1").await;
    assert_eq!(persisted.screen_visits["Dashboard"], 2);
}

#[tokio::test]
async fn clear_wipes_memory_and_store() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let engine = WarmingEngine::new(
        Arc::new(MockPrefetcher::default()),
        Arc::clone(&kv),
        member_config(),
    )
    .await;

    engine.record_screen_visit("Dashboard");
    sleep(Duration::from_millis(20)).await;
    engine.clear_user_patterns().await;

    assert!(engine.stats().user_patterns.is_empty());
    assert!(PatternStore::new(kv).load("u1").await.is_empty());
}

#[tokio::test]
async fn user_change_reloads_that_users_patterns() {
    let kv = Arc::new(MemoryKeyValueStore::new());
    let mut other_users_pattern = UserPattern::default();
    other_users_pattern.record_visit("Attendance", 9);
    PatternStore::new(Arc::clone(&kv))
        .save("u2", &other_users_pattern)
        .await;

    let engine = WarmingEngine::new(
        Arc::new(MockPrefetcher::default()),
        Arc::clone(&kv),
        member_config(),
    )
    .await;
    engine.record_screen_visit("Dashboard");

    engine
        .update_config(WarmingConfigPatch {
            user_id: Some("u2".to_string()),
            ..Default::default()
        })
        .await;

    let stats = engine.stats();
    assert_eq!(stats.config.user_id, "u2");
    assert!(stats.user_patterns.screen_visits.contains_key("Attendance"));
    assert!(!stats.user_patterns.screen_visits.contains_key("Dashboard"));
}
