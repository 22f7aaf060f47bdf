use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured key addressing one resource in the external cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Resource being cached, e.g. `"upcoming_events"`.
    pub resource: String,
    /// User the resource is scoped to, when user-scoped.
    pub user_id: Option<String>,
}

impl CacheKey {
    /// Key for a resource shared across the organization.
    pub fn shared(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            user_id: None,
        }
    }

    /// Key for a resource scoped to one user.
    pub fn for_user(resource: &str, user_id: &str) -> Self {
        Self {
            resource: resource.to_string(),
            user_id: Some(user_id.to_string()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user_id {
            Some(user_id) => write!(f, "{}:{}", self.resource, user_id),
            None => write!(f, "{}", self.resource),
        }
    }
}

/// Named staleness class forwarded to the prefetch layer.
///
/// The classes are opaque to this component; the cache layer maps each to
/// its own freshness window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// Rarely changes within a session.
    Static,
    /// Must be present early; moderate staleness tolerated.
    Critical,
    /// Refreshed on normal navigation cadence.
    Dynamic,
    /// Near-live data; shortest staleness window.
    Realtime,
}
