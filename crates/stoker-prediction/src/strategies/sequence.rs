use indexmap::IndexMap;

use stoker_core::constants::MAX_SEQUENCE_PREDICTIONS;
use stoker_core::UserPattern;

use super::ScreenPrediction;

/// Sequence prediction strategy.
///
/// Predicts which screens the user navigates to next, from the recorded
/// navigation sequences.
pub struct SequenceStrategy;

impl SequenceStrategy {
    /// Predict up to 3 likely next screens after `current_screen`.
    ///
    /// Every occurrence of `current_screen` that is followed by another
    /// screen counts one vote for that successor. Successors are ranked by
    /// descending count; equal counts keep first-encountered order. Empty
    /// when the screen was never observed with a successor.
    pub fn predict(pattern: &UserPattern, current_screen: &str) -> Vec<ScreenPrediction> {
        let mut successor_counts: IndexMap<&str, u32> = IndexMap::new();

        for sequence in &pattern.sequence_patterns {
            for pair in sequence.windows(2) {
                if pair[0] == current_screen {
                    *successor_counts.entry(pair[1].as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, u32)> = successor_counts.into_iter().collect();
        // Vec::sort_by is stable: ties keep insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(MAX_SEQUENCE_PREDICTIONS)
            .map(|(screen, count)| ScreenPrediction {
                screen: screen.to_string(),
                score: f64::from(count),
            })
            .collect()
    }
}
