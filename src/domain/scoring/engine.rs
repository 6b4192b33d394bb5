//! Scoring engine - pure function from answers to scores.

use crate::domain::foundation::SliderValue;
use crate::domain::session::{AnswerStore, AttachmentStyle};

use super::scores::Scores;

/// Computes the five scores from the current answers.
///
/// # Edge Cases
/// - Boundaries never touched: the sliders sit at the midpoint, so 5.0
/// - Boundaries stored as an empty list: 0.0
/// - Attachment category never touched or empty: 0.0
///
/// Never fails; slider values are clamped before averaging.
pub fn compute_scores(answers: &AnswerStore) -> Scores {
    let boundaries = answers
        .boundary_values()
        .map_or(f64::from(SliderValue::MIDPOINT.value()), mean);
    let attachment = |style| answers.attachment_values(style).map_or(0.0, mean);

    Scores {
        boundaries,
        security: attachment(AttachmentStyle::Secure),
        anxiety: attachment(AttachmentStyle::Anxious),
        avoidance: attachment(AttachmentStyle::Avoidant),
        ambivalence: attachment(AttachmentStyle::Fearful),
    }
}

fn mean(values: &[SliderValue]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u32 = values.iter().map(|v| u32::from(v.value())).sum();
    f64::from(sum) / values.len() as f64
}
