//! Warming configuration and partial-update merging.

use serde::{Deserialize, Serialize};

use crate::models::MemberRole;

mod defaults {
    pub const DEFAULT_ENABLED: bool = true;
}

/// Cache-warming subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmingConfig {
    /// User the pattern store and cache keys are scoped to.
    pub user_id: String,
    /// Role of the current user; selects the role-specific warming set.
    pub role: MemberRole,
    /// Kill switch. When false, `warm_cache` is a no-op.
    pub enabled: bool,
}

impl Default for WarmingConfig {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            role: MemberRole::Member,
            enabled: defaults::DEFAULT_ENABLED,
        }
    }
}

/// Partial configuration update. Unset fields leave the current value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarmingConfigPatch {
    pub user_id: Option<String>,
    pub role: Option<MemberRole>,
    pub enabled: Option<bool>,
}

impl WarmingConfig {
    /// Merge a patch into this config, field by field.
    pub fn apply(&mut self, patch: WarmingConfigPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
    }
}
