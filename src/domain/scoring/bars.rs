//! Text bars for the summary step.

use super::scores::{ScoreLabel, Scores, SCORE_MAX};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Cells in one bar.
pub const BAR_CELLS: usize = 10;

/// Renders one score as a ten-cell bar followed by its value.
///
/// The number of filled cells is the score rounded half to even.
pub fn score_bar(label: ScoreLabel, value: f64) -> String {
    let clamped = if value.is_finite() {
        value.clamp(0.0, SCORE_MAX)
    } else {
        0.0
    };
    let filled = clamped.round_ties_even() as usize;
    let bar: String = std::iter::repeat(FILLED)
        .take(filled)
        .chain(std::iter::repeat(EMPTY).take(BAR_CELLS - filled))
        .collect();
    format!("{:>20}: {}  {:.1}/10", label.label(), bar, value)
}

/// Renders all five scores, one bar per line.
pub fn score_bars(scores: &Scores) -> String {
    scores
        .entries()
        .iter()
        .map(|(label, value)| score_bar(*label, *value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_empty_bars() {
        let full = score_bar(ScoreLabel::Security, 10.0);
        assert!(full.ends_with("██████████  10.0/10"));
        let empty = score_bar(ScoreLabel::Anxiety, 0.0);
        assert!(empty.ends_with("░░░░░░░░░░  0.0/10"));
    }

    #[test]
    fn half_values_round_to_even() {
        let bar = score_bar(ScoreLabel::Boundaries, 2.5);
        assert_eq!(bar.chars().filter(|&c| c == FILLED).count(), 2);
        let bar = score_bar(ScoreLabel::Boundaries, 3.5);
        assert_eq!(bar.chars().filter(|&c| c == FILLED).count(), 4);
    }

    #[test]
    fn labels_are_right_aligned() {
        let bar = score_bar(ScoreLabel::Security, 5.0);
        assert!(bar.starts_with("            Trygghet: "));
    }

    #[test]
    fn bars_cover_every_score() {
        let scores = Scores {
            boundaries: 5.0,
            security: 1.0,
            anxiety: 2.0,
            avoidance: 3.0,
            ambivalence: 4.0,
        };
        assert_eq!(score_bars(&scores).lines().count(), 5);
    }
}
