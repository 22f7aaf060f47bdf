use async_trait::async_trait;

use crate::errors::PrefetchResult;
use crate::models::{CacheKey, CachePolicy};

/// The external query/prefetch layer.
///
/// `prefetch` resolves once the resource has been fetched into the cache
/// under the given key and staleness class. Implementations own their own
/// timeout behavior; the scheduler applies none.
#[async_trait]
pub trait Prefetcher: Send + Sync {
    async fn prefetch(&self, key: CacheKey, policy: CachePolicy) -> PrefetchResult<()>;
}
