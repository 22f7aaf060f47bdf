//! Prediction strategies.
//!
//! Each strategy ranks candidates by descending score with a stable sort,
//! so equal scores keep first-encountered order. Downstream priority
//! assignment depends on that ordering being deterministic.

pub mod sequence;
pub mod temporal;

pub use sequence::SequenceStrategy;
pub use temporal::TemporalStrategy;

use serde::Serialize;

/// A screen predicted by a strategy, with its strategy-specific score.
///
/// Sequence scores are raw successor counts; temporal scores are hour
/// ratios in `(0.0, 1.0]`. Scores are comparable within one strategy only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenPrediction {
    pub screen: String,
    pub score: f64,
}
