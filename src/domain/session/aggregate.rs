//! ReflectionSession aggregate.
//!
//! One user's pass through the wizard: profile, answers, step index, the
//! reflection deck and the quick-exit flag.
//!
//! # Ownership
//!
//! The wizard controller owns the step index. Writes are accepted only for
//! fields owned by the active step; everything else is read-only from outside.

use crate::domain::export::{AppInfo, SessionSnapshot};
use crate::domain::foundation::{DomainError, ErrorCode, Section, SessionId, Timestamp};
use crate::domain::scoring::{compute_scores, Scores};
use crate::domain::share::Theme;
use crate::domain::wizard::{NavigationOutcome, Progress, WizardController};

use super::answers::{AnswerInput, AnswerStore};
use super::deck::ReflectionDeck;
use super::events::SessionEvent;
use super::profile::ProfileState;

/// Breathing instruction shown after a quick exit.
pub const CALM_MESSAGE: &str =
    "Du är trygg här. Andas in i 4 sekunder, håll 7, andas ut 8. Upprepa 3 gånger.";

/// Session aggregate.
///
/// # Invariants
///
/// - only the active step writes its fields
/// - while `panic_mode` is set every mutation except [`reset`](Self::reset) is rejected
/// - `reset` leaves profile and answers at their defaults and the index at 0
#[derive(Debug, Clone)]
pub struct ReflectionSession {
    id: SessionId,
    started_at: Timestamp,
    profile: ProfileState,
    answers: AnswerStore,
    wizard: WizardController,
    deck: ReflectionDeck,
    panic_mode: bool,
}

impl Default for ReflectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectionSession {
    /// Starts a fresh session on the intro.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            profile: ProfileState::default(),
            answers: AnswerStore::new(),
            wizard: WizardController::new(),
            deck: ReflectionDeck::new(),
            panic_mode: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Correlation id for logs.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn deck(&self) -> &ReflectionDeck {
        &self.deck
    }

    pub fn current_section(&self) -> Section {
        self.wizard.current()
    }

    pub fn progress(&self) -> Progress {
        self.wizard.progress()
    }

    /// Returns true while the calm screen is showing.
    pub fn is_panic_mode(&self) -> bool {
        self.panic_mode
    }

    pub fn theme(&self) -> Theme {
        self.profile.theme()
    }

    /// Scores for the current answers.
    pub fn scores(&self) -> Scores {
        compute_scores(&self.answers)
    }

    /// Freezes the session into an exportable snapshot.
    pub fn snapshot(&self, app: &AppInfo) -> SessionSnapshot {
        SessionSnapshot::capture(app, self.started_at, &self.profile, &self.answers)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves one step forward; leaving the intro needs consent.
    pub fn advance(&mut self) -> Result<SessionEvent, DomainError> {
        self.ensure_unlocked()?;
        let outcome = self.wizard.advance(self.profile.consent_given);
        Ok(self.navigated(outcome))
    }

    /// Moves one step back.
    pub fn retreat(&mut self) -> Result<SessionEvent, DomainError> {
        self.ensure_unlocked()?;
        let outcome = self.wizard.retreat();
        Ok(self.navigated(outcome))
    }

    /// Jumps to a section by id; unknown ids land on the intro.
    pub fn jump_to(&mut self, section_id: &str) -> Result<SessionEvent, DomainError> {
        self.ensure_unlocked()?;
        let outcome = self.wizard.jump_to(section_id);
        Ok(self.navigated(outcome))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Updates the intro fields. The name is trimmed.
    pub fn update_profile(
        &mut self,
        name: &str,
        private_mode: bool,
        consent_given: bool,
    ) -> Result<SessionEvent, DomainError> {
        self.ensure_active(Section::Intro)?;
        self.profile.name = name.trim().to_string();
        self.profile.private_mode = private_mode;
        self.profile.consent_given = consent_given;
        Ok(SessionEvent::ProfileUpdated)
    }

    /// Switches the colour scheme. Allowed from any step.
    pub fn set_theme(&mut self, theme: Theme) -> Result<SessionEvent, DomainError> {
        self.ensure_unlocked()?;
        self.profile.light_theme = theme.is_light();
        Ok(SessionEvent::ThemeChanged { theme })
    }

    /// Records an answer owned by the active step.
    ///
    /// # Errors
    ///
    /// - `SectionNotActive` if the answer belongs to another step
    /// - `SessionLocked` after a quick exit
    /// - validation codes for shape violations; the answers are left unchanged
    pub fn record(&mut self, input: AnswerInput) -> Result<SessionEvent, DomainError> {
        let key = input.key();
        self.ensure_active(key.section())?;
        input.apply_to(&mut self.answers).map_err(|err| {
            tracing::debug!(session_id = %self.id, key = %key, error = %err, "answer rejected");
            DomainError::from(err)
        })?;
        Ok(SessionEvent::AnswerRecorded { key })
    }

    /// Draws the next reflection card.
    pub fn draw_card(&mut self) -> Result<SessionEvent, DomainError> {
        self.ensure_active(Section::Cards)?;
        let index = self.deck.draw();
        Ok(SessionEvent::CardDrawn { index })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Wipes everything and starts over on the intro. Idempotent.
    ///
    /// This is also the only way out of the calm screen.
    pub fn reset(&mut self) -> SessionEvent {
        tracing::debug!(session_id = %self.id, "session reset");
        *self = Self::new();
        SessionEvent::SessionReset
    }

    /// Wipes everything and shows the calm screen.
    pub fn quick_exit(&mut self) -> SessionEvent {
        tracing::debug!(session_id = %self.id, "quick exit");
        *self = Self::new();
        self.panic_mode = true;
        SessionEvent::QuickExit
    }

    fn navigated(&self, outcome: NavigationOutcome) -> SessionEvent {
        if outcome == NavigationOutcome::ConsentRequired {
            tracing::debug!(session_id = %self.id, "advance blocked until consent is given");
        }
        SessionEvent::Navigated { outcome }
    }

    fn ensure_unlocked(&self) -> Result<(), DomainError> {
        if self.panic_mode {
            return Err(DomainError::new(
                ErrorCode::SessionLocked,
                "Session was closed with quick exit; start a new session",
            ));
        }
        Ok(())
    }

    fn ensure_active(&self, section: Section) -> Result<(), DomainError> {
        self.ensure_unlocked()?;
        let active = self.current_section();
        if active != section {
            return Err(DomainError::new(
                ErrorCode::SectionNotActive,
                format!("'{}' can only be edited on its own step", section.id()),
            )
            .with_detail("active", active.id())
            .with_detail("requested", section.id()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::AnswerKey;

    fn consented() -> ReflectionSession {
        let mut session = ReflectionSession::new();
        session.update_profile("Noor", true, true).unwrap();
        session
    }

    fn at(section: Section) -> ReflectionSession {
        let mut session = consented();
        session.jump_to(section.id()).unwrap();
        session
    }

    #[test]
    fn new_session_starts_clean_on_intro() {
        let session = ReflectionSession::new();
        assert_eq!(session.current_section(), Section::Intro);
        assert!(session.answers().is_empty());
        assert!(session.profile().private_mode);
        assert!(!session.is_panic_mode());
    }

    #[test]
    fn advance_without_consent_reports_consent_required() {
        let mut session = ReflectionSession::new();
        let event = session.advance().unwrap();
        assert_eq!(
            event,
            SessionEvent::Navigated {
                outcome: NavigationOutcome::ConsentRequired
            }
        );
        assert_eq!(session.current_section(), Section::Intro);
    }

    #[test]
    fn advance_with_consent_moves_on() {
        let mut session = consented();
        session.advance().unwrap();
        assert_eq!(session.current_section(), Section::Ground);
        assert_eq!(session.profile().name, "Noor");
    }

    #[test]
    fn profile_name_is_trimmed() {
        let mut session = ReflectionSession::new();
        session.update_profile("  Sam  ", false, true).unwrap();
        assert_eq!(session.profile().name, "Sam");
        assert!(!session.profile().private_mode);
    }

    #[test]
    fn active_step_may_record_its_answers() {
        let mut session = at(Section::Letter);
        let event = session
            .record(AnswerInput::SelfLetter("Hej framtida jag".to_string()))
            .unwrap();
        assert_eq!(
            event,
            SessionEvent::AnswerRecorded {
                key: AnswerKey::SelfLetter
            }
        );
        assert_eq!(session.answers().self_letter(), "Hej framtida jag");
    }

    #[test]
    fn writes_from_inactive_steps_are_rejected() {
        let mut session = at(Section::Ground);
        let err = session
            .record(AnswerInput::Boundary { item: 0, value: 9 })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SectionNotActive);
        assert!(session.answers().is_empty());

        let err = session.update_profile("X", true, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::SectionNotActive);
    }

    #[test]
    fn invalid_answers_leave_state_unchanged() {
        let mut session = at(Section::Values);
        let too_many = ["Frihet", "Humor", "Mod", "Tillit", "Balans", "Kärlek", "Ansvar"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = session.record(AnswerInput::TopValues(too_many)).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(session.answers().top_values().is_empty());
    }

    #[test]
    fn cards_are_drawn_only_on_cards_step() {
        let mut session = at(Section::Cards);
        assert_eq!(
            session.draw_card().unwrap(),
            SessionEvent::CardDrawn { index: 0 }
        );
        session.retreat().unwrap();
        assert_eq!(
            session.draw_card().unwrap_err().code,
            ErrorCode::SectionNotActive
        );
    }

    #[test]
    fn theme_can_change_from_any_step() {
        let mut session = at(Section::Attachment);
        let event = session.set_theme(Theme::Light).unwrap();
        assert_eq!(event, SessionEvent::ThemeChanged { theme: Theme::Light });
        assert!(session.profile().light_theme);
    }

    #[test]
    fn reset_wipes_everything_and_is_idempotent() {
        let mut session = at(Section::Boundaries);
        session
            .record(AnswerInput::Boundary { item: 1, value: 2 })
            .unwrap();
        session.reset();
        assert!(session.answers().is_empty());
        assert_eq!(session.wizard().index(), 0);
        assert_eq!(*session.profile(), ProfileState::default());

        session.reset();
        assert!(session.answers().is_empty());
        assert_eq!(session.wizard().index(), 0);
    }

    #[test]
    fn quick_exit_locks_until_reset() {
        let mut session = at(Section::Letter);
        session
            .record(AnswerInput::SelfLetter("privat".to_string()))
            .unwrap();
        assert_eq!(session.quick_exit(), SessionEvent::QuickExit);
        assert!(session.is_panic_mode());
        assert!(session.answers().is_empty());
        assert_eq!(session.advance().unwrap_err().code, ErrorCode::SessionLocked);
        assert_eq!(
            session.set_theme(Theme::Light).unwrap_err().code,
            ErrorCode::SessionLocked
        );

        session.reset();
        assert!(!session.is_panic_mode());
    }

    #[test]
    fn scores_track_answers() {
        let mut session = at(Section::Boundaries);
        assert_eq!(session.scores().boundaries, 5.0);
        for item in 0..8 {
            session
                .record(AnswerInput::Boundary { item, value: 8 })
                .unwrap();
        }
        assert_eq!(session.scores().boundaries, 8.0);
    }

    #[test]
    fn snapshot_carries_start_time_and_profile() {
        let session = consented();
        let snapshot = session.snapshot(&AppInfo::default());
        assert_eq!(snapshot.meta().started_at, *session.started_at());
        assert_eq!(snapshot.profile().name, "Noor");
    }
}
