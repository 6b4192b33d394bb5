//! WizardController - the step sequencer.
//!
//! Owns the active step index exclusively. Every navigation operation is total:
//! out-of-bounds moves saturate and unknown section ids land on the intro.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Section;

use super::section_sequence::{SectionSequence, SECTION_COUNT};

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// The active section changed.
    Moved { from: Section, to: Section },
    /// The request was valid but the index was already saturated.
    Unchanged { at: Section },
    /// Leaving the intro requires consent.
    ConsentRequired,
}

impl NavigationOutcome {
    /// Returns true if the active section changed.
    pub fn moved(&self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }
}

/// Position of the active step within the wizard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based step number.
    pub step: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share of the wizard, in (0, 1].
    pub fn fraction(&self) -> f64 {
        self.step as f64 / self.total as f64
    }

    /// Progress caption, e.g. `Steg 3 / 11`.
    pub fn label(&self) -> String {
        format!("Steg {} / {}", self.step, self.total)
    }
}

/// Finite-state sequencer over the wizard sections.
///
/// # Invariants
///
/// - `index < SECTION_COUNT`
/// - `advance()` never decreases the index, `retreat()` never increases it
/// - leaving the intro forward requires consent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    index: usize,
}

impl WizardController {
    /// Creates a controller positioned on the intro.
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns the 0-based index of the active section.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the active section.
    pub fn current(&self) -> Section {
        SectionSequence::at(self.index)
    }

    /// Returns true on the summary, which has no forward transition.
    pub fn is_terminal(&self) -> bool {
        SectionSequence::is_last(self.current())
    }

    /// Returns the step counter for the progress indicator.
    pub fn progress(&self) -> Progress {
        Progress {
            step: self.index + 1,
            total: SECTION_COUNT,
        }
    }

    /// Moves one section forward.
    ///
    /// From the intro this is a no-op unless `consent_given` is true.
    pub fn advance(&mut self, consent_given: bool) -> NavigationOutcome {
        if self.current() == Section::Intro && !consent_given {
            return NavigationOutcome::ConsentRequired;
        }
        self.move_to((self.index + 1).min(SECTION_COUNT - 1))
    }

    /// Moves one section back, stopping at the intro.
    pub fn retreat(&mut self) -> NavigationOutcome {
        self.move_to(self.index.saturating_sub(1))
    }

    /// Jumps to a section by identifier; unknown identifiers go to the intro.
    pub fn jump_to(&mut self, section_id: &str) -> NavigationOutcome {
        self.move_to(SectionSequence::resolve(section_id))
    }

    /// Returns to the intro.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    fn move_to(&mut self, target: usize) -> NavigationOutcome {
        let from = self.current();
        self.index = target.min(SECTION_COUNT - 1);
        let to = self.current();
        if from == to {
            NavigationOutcome::Unchanged { at: to }
        } else {
            NavigationOutcome::Moved { from, to }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(section: Section) -> WizardController {
        let mut controller = WizardController::new();
        controller.jump_to(section.id());
        controller
    }

    #[test]
    fn new_controller_starts_on_intro() {
        let controller = WizardController::new();
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.current(), Section::Intro);
    }

    #[test]
    fn advance_from_intro_without_consent_is_noop() {
        let mut controller = WizardController::new();
        assert_eq!(controller.advance(false), NavigationOutcome::ConsentRequired);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn advance_from_intro_with_consent_moves_to_ground() {
        let mut controller = WizardController::new();
        let outcome = controller.advance(true);
        assert_eq!(
            outcome,
            NavigationOutcome::Moved {
                from: Section::Intro,
                to: Section::Ground
            }
        );
    }

    #[test]
    fn consent_only_gates_the_intro() {
        let mut controller = at(Section::Timeline);
        assert!(controller.advance(false).moved());
        assert_eq!(controller.current(), Section::Voices);
    }

    #[test]
    fn advance_on_summary_stays_put() {
        let mut controller = at(Section::Summary);
        assert!(controller.is_terminal());
        assert_eq!(
            controller.advance(true),
            NavigationOutcome::Unchanged { at: Section::Summary }
        );
    }

    #[test]
    fn retreat_on_intro_stays_put() {
        let mut controller = WizardController::new();
        assert_eq!(
            controller.retreat(),
            NavigationOutcome::Unchanged { at: Section::Intro }
        );
    }

    #[test]
    fn jump_to_unknown_id_lands_on_intro() {
        let mut controller = at(Section::Values);
        let outcome = controller.jump_to("nowhere");
        assert_eq!(
            outcome,
            NavigationOutcome::Moved {
                from: Section::Values,
                to: Section::Intro
            }
        );
    }

    #[test]
    fn reset_returns_to_intro() {
        let mut controller = at(Section::Letter);
        controller.reset();
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn progress_reports_one_based_step() {
        let controller = at(Section::Timeline);
        let progress = controller.progress();
        assert_eq!(progress.step, 3);
        assert_eq!(progress.label(), "Steg 3 / 11");
        assert!((progress.fraction() - 3.0 / 11.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn advance_never_decreases_or_overflows(start in 0usize..11, consent in any::<bool>()) {
            let mut controller = at(SectionSequence::at(start));
            let before = controller.index();
            controller.advance(consent);
            prop_assert!(controller.index() >= before);
            prop_assert!(controller.index() < SECTION_COUNT);
        }

        #[test]
        fn retreat_never_increases_or_underflows(start in 0usize..11) {
            let mut controller = at(SectionSequence::at(start));
            let before = controller.index();
            controller.retreat();
            prop_assert!(controller.index() <= before);
            prop_assert_eq!(controller.index(), before.saturating_sub(1));
        }

        #[test]
        fn random_walks_stay_in_bounds(moves in proptest::collection::vec(0u8..3, 0..64)) {
            let mut controller = WizardController::new();
            for m in moves {
                match m {
                    0 => { controller.advance(true); }
                    1 => { controller.retreat(); }
                    _ => { controller.jump_to("cards"); }
                }
                prop_assert!(controller.index() < SECTION_COUNT);
            }
        }
    }
}
