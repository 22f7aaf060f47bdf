//! UserPattern: per-user navigation history backing all predictions.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SEQUENCE_HISTORY, MAX_TIME_ENTRIES_PER_SCREEN};

/// Navigation and usage history for one user.
///
/// Maps are insertion-ordered so prediction tie-breaks stay in
/// first-encountered order across save/load cycles. A user with no
/// persisted record loads as `UserPattern::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPattern {
    /// Visit count per screen.
    pub screen_visits: IndexMap<String, u32>,
    /// Hour of day (0-23) of each visit, per screen. Most recent 100 kept.
    pub time_patterns: IndexMap<String, Vec<u32>>,
    /// Navigation sequences in arrival order. Most recent 50 kept.
    pub sequence_patterns: Vec<Vec<String>>,
    /// Timestamp of the last write.
    pub last_updated: DateTime<Utc>,
}

impl Default for UserPattern {
    fn default() -> Self {
        Self {
            screen_visits: IndexMap::new(),
            time_patterns: IndexMap::new(),
            sequence_patterns: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

impl UserPattern {
    /// Record one visit to a screen at the given hour of day.
    pub fn record_visit(&mut self, screen: &str, hour: u32) {
        *self.screen_visits.entry(screen.to_string()).or_insert(0) += 1;

        let hours = self.time_patterns.entry(screen.to_string()).or_default();
        hours.push(hour);
        if hours.len() > MAX_TIME_ENTRIES_PER_SCREEN {
            let excess = hours.len() - MAX_TIME_ENTRIES_PER_SCREEN;
            hours.drain(..excess);
        }

        self.last_updated = Utc::now();
    }

    /// Record a completed navigation sequence.
    pub fn record_sequence(&mut self, sequence: Vec<String>) {
        self.sequence_patterns.push(sequence);
        if self.sequence_patterns.len() > MAX_SEQUENCE_HISTORY {
            let excess = self.sequence_patterns.len() - MAX_SEQUENCE_HISTORY;
            self.sequence_patterns.drain(..excess);
        }

        self.last_updated = Utc::now();
    }

    /// True when no history has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.screen_visits.is_empty()
            && self.time_patterns.is_empty()
            && self.sequence_patterns.is_empty()
    }
}
