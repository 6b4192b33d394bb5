//! Session events.
//!
//! Every controlled transition of a [`ReflectionSession`](super::ReflectionSession)
//! yields one event, which is handed to the renderer.

use serde::Serialize;

use crate::domain::share::Theme;
use crate::domain::wizard::NavigationOutcome;

use super::answers::AnswerKey;

/// Describes the change a session transition made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A navigation request was handled.
    Navigated { outcome: NavigationOutcome },
    /// The intro step changed name, privacy or consent.
    ProfileUpdated,
    /// The colour scheme was toggled.
    ThemeChanged { theme: Theme },
    /// The active step wrote an answer.
    AnswerRecorded { key: AnswerKey },
    /// A reflection card was drawn.
    CardDrawn { index: usize },
    /// All state was wiped and a fresh session started.
    SessionReset,
    /// All state was wiped and the calm screen is showing.
    QuickExit,
}

impl SessionEvent {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Navigated { .. } => "navigated",
            SessionEvent::ProfileUpdated => "profile_updated",
            SessionEvent::ThemeChanged { .. } => "theme_changed",
            SessionEvent::AnswerRecorded { .. } => "answer_recorded",
            SessionEvent::CardDrawn { .. } => "card_drawn",
            SessionEvent::SessionReset => "session_reset",
            SessionEvent::QuickExit => "quick_exit",
        }
    }
}
