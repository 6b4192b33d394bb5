//! WizardService - runs one session against a renderer.
//!
//! Each command runs to completion against the session before the renderer
//! is invoked with the resulting event.

use crate::domain::foundation::DomainError;
use crate::domain::session::{AnswerInput, ReflectionSession, SessionEvent};
use crate::domain::share::{LinkParams, Theme};
use crate::ports::SessionRenderer;

/// A user interaction with the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Advance,
    Retreat,
    JumpTo(String),
    UpdateProfile {
        name: String,
        private_mode: bool,
        consent_given: bool,
    },
    SetTheme(Theme),
    Record(AnswerInput),
    DrawCard,
    Reset,
    QuickExit,
}

/// Owns the session and its renderer.
pub struct WizardService<R: SessionRenderer> {
    session: ReflectionSession,
    renderer: R,
}

impl<R: SessionRenderer> WizardService<R> {
    /// Starts a fresh session and applies its theme.
    pub fn new(renderer: R) -> Self {
        Self::with_session(ReflectionSession::new(), renderer)
    }

    pub fn with_session(session: ReflectionSession, mut renderer: R) -> Self {
        renderer.apply_theme(session.theme(), session.profile().private_mode);
        Self { session, renderer }
    }

    pub fn session(&self) -> &ReflectionSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Borrows the session and renderer together, for adapter-specific redraws.
    pub fn parts_mut(&mut self) -> (&ReflectionSession, &mut R) {
        (&self.session, &mut self.renderer)
    }

    pub fn into_parts(self) -> (ReflectionSession, R) {
        (self.session, self.renderer)
    }

    /// Link parameters that persist the current theme.
    pub fn theme_params(&self) -> LinkParams {
        LinkParams::for_theme(self.session.theme())
    }

    /// Applies one command, then renders.
    pub fn apply(&mut self, cmd: WizardCommand) -> Result<SessionEvent, DomainError> {
        let result = match cmd {
            WizardCommand::Advance => self.session.advance(),
            WizardCommand::Retreat => self.session.retreat(),
            WizardCommand::JumpTo(section_id) => self.session.jump_to(&section_id),
            WizardCommand::UpdateProfile {
                name,
                private_mode,
                consent_given,
            } => self
                .session
                .update_profile(&name, private_mode, consent_given),
            WizardCommand::SetTheme(theme) => self.session.set_theme(theme),
            WizardCommand::Record(input) => self.session.record(input),
            WizardCommand::DrawCard => self.session.draw_card(),
            WizardCommand::Reset => Ok(self.session.reset()),
            WizardCommand::QuickExit => Ok(self.session.quick_exit()),
        };

        match &result {
            Ok(event) => {
                tracing::debug!(
                    session_id = %self.session.id(),
                    event = event.name(),
                    section = self.session.current_section().id(),
                    "session transition"
                );
                if matches!(
                    event,
                    SessionEvent::ThemeChanged { .. }
                        | SessionEvent::ProfileUpdated
                        | SessionEvent::SessionReset
                        | SessionEvent::QuickExit
                ) {
                    self.renderer.apply_theme(
                        self.session.theme(),
                        self.session.profile().private_mode,
                    );
                }
                self.renderer.render(&self.session, event);
            }
            Err(err) => {
                tracing::debug!(session_id = %self.session.id(), error = %err, "transition rejected");
                self.renderer.report_error(&self.session, err);
            }
        }
        result
    }
}
