//! SessionRenderer port - the UI surface that draws the session.

use crate::domain::foundation::DomainError;
use crate::domain::session::{ReflectionSession, SessionEvent};
use crate::domain::share::Theme;

/// Draws the session after each controlled transition.
///
/// Implementations read the session but never mutate it.
pub trait SessionRenderer {
    /// Called once after every successful transition.
    fn render(&mut self, session: &ReflectionSession, event: &SessionEvent);

    /// Applies the colour scheme and privacy flag. Returns nothing.
    fn apply_theme(&mut self, _theme: Theme, _private_mode: bool) {}

    /// Called when a transition was rejected.
    fn report_error(&mut self, _session: &ReflectionSession, _error: &DomainError) {}
}
