//! # stoker-core
//!
//! Foundation crate for the Stoker cache-warming system.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{WarmingConfig, WarmingConfigPatch};
pub use errors::{PrefetchError, StoreError};
pub use models::{
    CacheKey, CachePolicy, MemberRole, UserPattern, WarmTarget, WarmingStats,
};
pub use traits::{KeyValueStore, Prefetcher};
