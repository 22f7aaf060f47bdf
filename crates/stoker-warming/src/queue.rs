//! Warming task queue: prioritized one-shot prefetch operations.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use stoker_core::errors::PrefetchResult;
use stoker_core::WarmTarget;

/// Boxed one-shot prefetch operation.
pub type TaskAction = Pin<Box<dyn Future<Output = PrefetchResult<()>> + Send>>;

/// One warming task: a fixed priority and the deferred prefetch call.
///
/// Tasks live for a single warming pass; the scheduler consumes them.
pub struct WarmingTask {
    pub priority: u8,
    pub target: WarmTarget,
    pub action: TaskAction,
}

impl WarmingTask {
    pub fn new(
        priority: u8,
        target: WarmTarget,
        action: impl Future<Output = PrefetchResult<()>> + Send + 'static,
    ) -> Self {
        Self {
            priority,
            target,
            action: Box::pin(action),
        }
    }
}

impl fmt::Debug for WarmingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarmingTask")
            .field("priority", &self.priority)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Order tasks highest priority first.
///
/// The sort must stay stable: equal priorities keep insertion order, and
/// launch determinism among equal priorities depends on it.
pub fn sort_by_priority(tasks: &mut [WarmingTask]) {
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
}
