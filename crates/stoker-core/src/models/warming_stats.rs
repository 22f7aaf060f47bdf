use serde::Serialize;

use crate::config::WarmingConfig;
use crate::models::UserPattern;

/// Read-only snapshot of the warming engine's state.
#[derive(Debug, Clone, Serialize)]
pub struct WarmingStats {
    /// Whether a warming pass is currently in flight.
    pub is_warming: bool,
    /// Size of the most recently constructed task queue.
    pub queue_length: usize,
    /// Tasks that settled successfully across all passes.
    pub completed_tasks: u64,
    /// Tasks that settled with a failure across all passes.
    pub failed_tasks: u64,
    /// Copy of the in-memory pattern state.
    pub user_patterns: UserPattern,
    /// Copy of the active configuration.
    pub config: WarmingConfig,
}
