//! Wizard module - section ordering and the step sequencer.

mod controller;
mod section_sequence;

pub use controller::{NavigationOutcome, Progress, WizardController};
pub use section_sequence::{SectionSequence, SECTION_COUNT};
