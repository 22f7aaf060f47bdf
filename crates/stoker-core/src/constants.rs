/// Stoker system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of warming tasks in flight at once.
pub const MAX_CONCURRENT_WARMING_TASKS: usize = 3;

/// Maximum hour-of-day entries retained per screen. Oldest dropped first.
pub const MAX_TIME_ENTRIES_PER_SCREEN: usize = 100;

/// Maximum navigation sequences retained per user. Oldest dropped first.
pub const MAX_SEQUENCE_HISTORY: usize = 50;

/// Maximum screens returned by sequence-based prediction.
pub const MAX_SEQUENCE_PREDICTIONS: usize = 3;

/// Maximum screens returned by time-of-day prediction.
pub const MAX_TEMPORAL_PREDICTIONS: usize = 5;

/// Minimum hour-ratio score for a screen to qualify as a temporal prediction.
pub const TEMPORAL_SCORE_THRESHOLD: f64 = 0.1;

/// Key prefix for persisted per-user pattern records.
pub const PATTERN_KEY_PREFIX: &str = "userPatterns_";
