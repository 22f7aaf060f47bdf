use std::cmp::Ordering;

use stoker_core::constants::{MAX_TEMPORAL_PREDICTIONS, TEMPORAL_SCORE_THRESHOLD};
use stoker_core::UserPattern;

use super::ScreenPrediction;

/// Temporal prediction strategy.
///
/// Predicts screens based on time-of-day usage: screens the user tends to
/// open at the current hour score high.
pub struct TemporalStrategy;

impl TemporalStrategy {
    /// Predict up to 5 screens likely to be opened at `hour`.
    ///
    /// A screen's score is the fraction of its recorded visits that fell on
    /// this hour. Only screens scoring above 0.1 qualify; a screen with no
    /// recorded visits is excluded. Ranked by descending score, equal
    /// scores keep first-encountered order.
    pub fn predict(pattern: &UserPattern, hour: u32) -> Vec<ScreenPrediction> {
        let mut scored: Vec<ScreenPrediction> = Vec::new();

        for (screen, hours) in &pattern.time_patterns {
            if hours.is_empty() {
                continue;
            }
            let at_hour = hours.iter().filter(|h| **h == hour).count();
            let score = at_hour as f64 / hours.len() as f64;
            if score > TEMPORAL_SCORE_THRESHOLD {
                scored.push(ScreenPrediction {
                    screen: screen.clone(),
                    score,
                });
            }
        }

        // Stable sort: equal scores keep map insertion order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(MAX_TEMPORAL_PREDICTIONS);
        scored
    }
}
