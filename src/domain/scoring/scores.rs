//! Scores - the five labelled numbers derived from the answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::session::AttachmentStyle;

/// Upper bound of every score.
pub const SCORE_MAX: f64 = 10.0;

/// The five score labels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLabel {
    Boundaries,
    Security,
    Anxiety,
    Avoidance,
    Ambivalence,
}

impl ScoreLabel {
    pub const ALL: [ScoreLabel; 5] = [
        ScoreLabel::Boundaries,
        ScoreLabel::Security,
        ScoreLabel::Anxiety,
        ScoreLabel::Avoidance,
        ScoreLabel::Ambivalence,
    ];

    /// Returns the display label, which is also the export key.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLabel::Boundaries => "Gränser",
            ScoreLabel::Security => "Trygghet",
            ScoreLabel::Anxiety => "Oro/Anknytning",
            ScoreLabel::Avoidance => "Avstånd/Undvikande",
            ScoreLabel::Ambivalence => "Ambivalens/Rädsla",
        }
    }

    /// Returns the score fed by an attachment category.
    pub fn for_attachment(style: AttachmentStyle) -> ScoreLabel {
        match style {
            AttachmentStyle::Secure => ScoreLabel::Security,
            AttachmentStyle::Anxious => ScoreLabel::Anxiety,
            AttachmentStyle::Avoidant => ScoreLabel::Avoidance,
            AttachmentStyle::Fearful => ScoreLabel::Ambivalence,
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived scores, each in [0, 10].
///
/// Recomputed from the answers on every read; a copy is embedded in exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "Gränser")]
    pub boundaries: f64,
    #[serde(rename = "Trygghet")]
    pub security: f64,
    #[serde(rename = "Oro/Anknytning")]
    pub anxiety: f64,
    #[serde(rename = "Avstånd/Undvikande")]
    pub avoidance: f64,
    #[serde(rename = "Ambivalens/Rädsla")]
    pub ambivalence: f64,
}

impl Scores {
    /// Returns the score for one label.
    pub fn get(&self, label: ScoreLabel) -> f64 {
        match label {
            ScoreLabel::Boundaries => self.boundaries,
            ScoreLabel::Security => self.security,
            ScoreLabel::Anxiety => self.anxiety,
            ScoreLabel::Avoidance => self.avoidance,
            ScoreLabel::Ambivalence => self.ambivalence,
        }
    }

    /// Returns every score with its label, in display order.
    pub fn entries(&self) -> [(ScoreLabel, f64); 5] {
        ScoreLabel::ALL.map(|label| (label, self.get(label)))
    }

    /// Checks that every score is a finite number in [0, 10].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (label, value) in self.entries() {
            if !value.is_finite() || !(0.0..=SCORE_MAX).contains(&value) {
                return Err(ValidationError::invalid_format(
                    label.label(),
                    format!("score {} outside 0-10", value),
                ));
            }
        }
        Ok(())
    }
}
