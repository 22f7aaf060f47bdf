//! BoundedScheduler: drains a prioritized task list with a concurrency cap.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use stoker_core::constants::MAX_CONCURRENT_WARMING_TASKS;

use crate::queue::{self, WarmingTask};

/// What happened to one drained batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Tasks that settled successfully.
    pub completed: usize,
    /// Tasks that settled with a failure.
    pub failed: usize,
}

/// Runs warming tasks with at most [`MAX_CONCURRENT_WARMING_TASKS`] in
/// flight at once.
#[derive(Debug, Default)]
pub struct BoundedScheduler;

impl BoundedScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Run every task to completion.
    ///
    /// Tasks launch in descending priority order (stable among equals); on
    /// each completion the freed slot goes to the next queued task. An
    /// individual failure is logged and counted, never propagated, and
    /// never cancels siblings. Returns once every task has settled.
    pub async fn drain(&self, mut tasks: Vec<WarmingTask>) -> BatchOutcome {
        queue::sort_by_priority(&mut tasks);

        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_WARMING_TASKS));
        let mut join_set = JoinSet::new();

        for task in tasks {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                // The semaphore is never closed.
                Err(_) => break,
            };
            let WarmingTask {
                priority,
                target,
                action,
            } = task;
            debug!(resource = target.resource_name(), priority, "launching warming task");
            join_set.spawn(async move {
                let _permit = permit;
                (target, action.await)
            });
        }

        let mut outcome = BatchOutcome::default();
        while let Some(settled) = join_set.join_next().await {
            match settled {
                Ok((_, Ok(()))) => outcome.completed += 1,
                Ok((target, Err(e))) => {
                    outcome.failed += 1;
                    warn!(resource = target.resource_name(), error = %e, "warming task failed");
                }
                Err(e) => {
                    outcome.failed += 1;
                    warn!(error = %e, "warming task panicked");
                }
            }
        }
        outcome
    }
}
