//! SectionSequence - Centralized ordering logic for the wizard sections.
//!
//! # Section Order
//!
//! 1. Intro → 2. Ground → 3. Timeline → 4. Voices → 5. Boundaries →
//! 6. Attachment → 7. Values → 8. Cards → 9. Soothing → 10. Letter →
//! 11. Summary
//!
//! # Usage
//!
//! ```ignore
//! use crate::domain::wizard::SectionSequence;
//! use crate::domain::foundation::Section;
//!
//! let idx = SectionSequence::resolve("values"); // 6
//! let unknown = SectionSequence::resolve("nope"); // 0, never fails
//! let next = SectionSequence::next(Section::Letter); // Some(Summary)
//! ```

use crate::domain::foundation::Section;

/// Number of sections in the wizard.
pub const SECTION_COUNT: usize = 11;

/// Central location for section ordering logic.
pub struct SectionSequence;

impl SectionSequence {
    /// The canonical order of wizard sections.
    pub const ORDER: [Section; SECTION_COUNT] = [
        Section::Intro,
        Section::Ground,
        Section::Timeline,
        Section::Voices,
        Section::Boundaries,
        Section::Attachment,
        Section::Values,
        Section::Cards,
        Section::Soothing,
        Section::Letter,
        Section::Summary,
    ];

    /// Returns all sections in order.
    pub fn all() -> &'static [Section; SECTION_COUNT] {
        &Self::ORDER
    }

    /// Returns the 0-based index of a section in the sequence.
    #[inline]
    pub fn order_index(section: Section) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == section)
            .unwrap_or(0)
    }

    /// Returns the section at `index`, clamped to the last section.
    pub fn at(index: usize) -> Section {
        Self::ORDER[index.min(SECTION_COUNT - 1)]
    }

    /// Resolves a section identifier to its index.
    ///
    /// Unknown identifiers resolve to the first section.
    pub fn resolve(section_id: &str) -> usize {
        Section::from_id(section_id)
            .map(Self::order_index)
            .unwrap_or(0)
    }

    /// Returns the next section in the sequence, or None if at the end.
    pub fn next(section: Section) -> Option<Section> {
        Self::ORDER.get(Self::order_index(section) + 1).copied()
    }

    /// Returns the previous section in the sequence, or None if at the start.
    pub fn previous(section: Section) -> Option<Section> {
        let idx = Self::order_index(section);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns the first section in the sequence.
    pub fn first() -> Section {
        Self::ORDER[0]
    }

    /// Returns the last (terminal) section in the sequence.
    pub fn last() -> Section {
        Self::ORDER[SECTION_COUNT - 1]
    }

    /// Returns true if this is the terminal section.
    pub fn is_last(section: Section) -> bool {
        section == Self::last()
    }
}
