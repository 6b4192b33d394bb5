//! Scoring module - derives the summary scores from the answers.

mod bars;
mod engine;
mod scores;

pub use bars::{score_bar, score_bars, BAR_CELLS};
pub use engine::compute_scores;
pub use scores::{ScoreLabel, Scores, SCORE_MAX};
