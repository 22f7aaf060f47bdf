//! Error types for the two external seams: device storage and the prefetch layer.
//!
//! Nothing in this workspace lets either error reach a public caller; they
//! exist so the store and scheduler can log what was absorbed.

/// Device-local key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key-value backend error: {message}")]
    Backend { message: String },

    #[error("stored record under {key} failed to parse: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Errors from the external query/prefetch layer.
#[derive(Debug, thiserror::Error)]
pub enum PrefetchError {
    #[error("prefetch of {key} failed: {message}")]
    Failed { key: String, message: String },

    #[error("remote backend unavailable: {message}")]
    Unavailable { message: String },
}

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result alias for prefetch operations.
pub type PrefetchResult<T> = Result<T, PrefetchError>;
