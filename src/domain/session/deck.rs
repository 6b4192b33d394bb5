//! Reflection deck cursor.

use super::catalog::{ReflectionCard, REFLECTION_CARDS};

/// Tracks which reflection card is face up.
///
/// Starts with no card drawn; each draw moves to the next card and wraps
/// after the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReflectionDeck {
    current: Option<usize>,
}

impl ReflectionDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next card and returns its index.
    pub fn draw(&mut self) -> usize {
        let next = self
            .current
            .map_or(0, |index| (index + 1) % REFLECTION_CARDS.len());
        self.current = Some(next);
        next
    }

    /// Index of the face-up card, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The face-up card, if any.
    pub fn current(&self) -> Option<&'static ReflectionCard> {
        self.current.and_then(|index| REFLECTION_CARDS.get(index))
    }

    /// Puts every card back.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
