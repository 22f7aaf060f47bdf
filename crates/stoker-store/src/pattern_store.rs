//! PatternStore: load/save/clear of per-user pattern records.

use chrono::Utc;
use tracing::warn;

use stoker_core::constants::PATTERN_KEY_PREFIX;
use stoker_core::traits::KeyValueStore;
use stoker_core::UserPattern;

/// Durable pattern storage over a device-local key-value backend.
///
/// No operation here returns an error: a missing or unreadable record loads
/// as the empty pattern, and write failures leave the in-memory state
/// authoritative for the rest of the session. No retries.
pub struct PatternStore<K> {
    kv: K,
}

impl<K: KeyValueStore> PatternStore<K> {
    /// Create a store over the given key-value backend.
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    fn record_key(user_id: &str) -> String {
        format!("{PATTERN_KEY_PREFIX}{user_id}")
    }

    /// Load the stored pattern for a user.
    ///
    /// A missing record and a record that fails to parse are treated the
    /// same way: the empty pattern. Parse failures are logged.
    pub async fn load(&self, user_id: &str) -> UserPattern {
        let key = Self::record_key(user_id);
        match self.kv.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(pattern) => pattern,
                Err(e) => {
                    warn!(user_id, error = %e, "stored pattern failed to parse, starting empty");
                    UserPattern::default()
                }
            },
            Ok(None) => UserPattern::default(),
            Err(e) => {
                warn!(user_id, error = %e, "pattern load failed, starting empty");
                UserPattern::default()
            }
        }
    }

    /// Persist a pattern snapshot for a user.
    ///
    /// Stamps `last_updated` with the write time before serializing.
    pub async fn save(&self, user_id: &str, pattern: &UserPattern) {
        let mut record = pattern.clone();
        record.last_updated = Utc::now();

        let raw = match serde_json::to_string(&record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(user_id, error = %e, "pattern serialization failed, skipping save");
                return;
            }
        };

        let key = Self::record_key(user_id);
        if let Err(e) = self.kv.set(&key, &raw).await {
            warn!(user_id, error = %e, "pattern save failed");
        }
    }

    /// Delete the persisted record for a user.
    pub async fn clear(&self, user_id: &str) {
        let key = Self::record_key(user_id);
        if let Err(e) = self.kv.remove(&key).await {
            warn!(user_id, error = %e, "pattern clear failed");
        }
    }
}
