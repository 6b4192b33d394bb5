//! Terminal renderer for the wizard.

use std::fmt::Write as _;
use std::io::Write;

use crate::domain::foundation::{DomainError, Section};
use crate::domain::scoring::score_bars;
use crate::domain::session::catalog::{
    BOUNDARY_STATEMENTS, MAX_TOP_VALUES, SOOTHING_OPTIONS, VALUES_POOL,
};
use crate::domain::session::{
    AttachmentStyle, ReflectionSession, SessionEvent, CALM_MESSAGE,
};
use crate::domain::share::Theme;
use crate::domain::wizard::NavigationOutcome;
use crate::ports::SessionRenderer;

const HIDDEN: &str = "•••";

/// Writes the active step as plain text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    private_mode: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            theme: Theme::default(),
            private_mode: true,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a free-standing line, e.g. a share link.
    pub fn notice(&mut self, text: &str) {
        self.flush(format!("{}\n", text));
    }

    /// Prints the banner and the active step.
    pub fn show(&mut self, session: &ReflectionSession) {
        let screen = self.screen(session);
        self.flush(screen);
    }

    fn flush(&mut self, text: String) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "terminal write failed");
        }
    }

    fn secret<'a>(&self, text: &'a str) -> &'a str {
        if self.private_mode && !text.is_empty() {
            HIDDEN
        } else {
            text
        }
    }

    fn screen(&self, session: &ReflectionSession) -> String {
        let mut s = String::new();
        if session.is_panic_mode() {
            let _ = writeln!(s, "\n{}\n(En trygg plats.)\n", CALM_MESSAGE);
            return s;
        }

        let section = session.current_section();
        let progress = session.progress();
        let _ = writeln!(s, "\n🌿 MirrorGarden  [{}]", progress.label());
        let _ = writeln!(s, "{} {}\n", section.emoji(), section.title());

        let answers = session.answers();
        match section {
            Section::Intro => {
                s.push_str("Innan vi börjar: detta är en mjuk, guidande upplevelse, inte terapi eller vård.\n");
                s.push_str("Du bestämmer takten och vad du vill dela. Inget lämnar datorn förrän du själv exporterar.\n\n");
                let profile = session.profile();
                let _ = writeln!(s, "Namn: {}", profile.display_name().unwrap_or("(valfritt)"));
                let _ = writeln!(s, "Privat läge: {}", on_off(profile.private_mode));
                let _ = writeln!(s, "Jag förstår och vill gå vidare: {}", on_off(profile.consent_given));
                s.push_str("\nKommandon: namn <text>, privat på|av, ja, nej, n\n");
            }
            Section::Ground => {
                s.push_str("Andas långsamt. Lägg märke till tre saker du ser, hör och känner.\n");
                let _ = writeln!(s, "Du skrev: {}", self.secret(answers.grounding_notes()));
                s.push_str("Varje rad läggs till. Kommandon: :n, :b, :rensa\n");
            }
            Section::Timeline => {
                s.push_str("Livslinje: tre nedslag som format dig.\n");
                for (i, point) in answers.timeline().iter().enumerate() {
                    let _ = writeln!(s, "  Nedslag {}: {}", i + 1, self.secret(point));
                }
            }
            Section::Voices => {
                let _ = writeln!(s, "Inre kritiker: {}", self.secret(answers.inner_critic()));
                let _ = writeln!(s, "Inre allierad: {}", self.secret(answers.inner_ally()));
                s.push_str("Kommandon: kritiker <text>, allierad <text>\n");
            }
            Section::Boundaries => {
                s.push_str("Skattning 0-10 (0 = stämmer inte alls, 10 = stämmer helt)\n");
                for (i, (statement, value)) in BOUNDARY_STATEMENTS
                    .iter()
                    .zip(answers.boundary_sliders())
                    .enumerate()
                {
                    let _ = writeln!(s, "  {}. {}  [{}]", i + 1, statement, value);
                }
            }
            Section::Attachment => {
                s.push_str("Hur ofta stämmer följande? (0 = aldrig, 10 = ofta)\n");
                for (c, style) in AttachmentStyle::ALL.iter().enumerate() {
                    let _ = writeln!(s, "  {}. {}", c + 1, style.label());
                    for (i, (statement, value)) in style
                        .statements()
                        .iter()
                        .zip(answers.attachment_sliders(*style))
                        .enumerate()
                    {
                        let _ = writeln!(s, "     {}. {}  [{}]", i + 1, statement, value);
                    }
                }
            }
            Section::Values => {
                let _ = writeln!(s, "Välj upp till {} som känns 'du':", MAX_TOP_VALUES);
                s.push_str(&numbered(&VALUES_POOL, answers.top_values()));
                let _ = writeln!(s, "Varför: {}", self.secret(answers.values_why()));
            }
            Section::Cards => match session.deck().current() {
                None => s.push_str("Skriv 'dra' för att dra ett kort.\n"),
                Some(card) => {
                    let _ = writeln!(s, "Fråga: {}", card.prompt);
                    let index = session.deck().current_index().unwrap_or_default();
                    if let Some(choices) = card.choices() {
                        let chosen = answers.card_answer_or_default(index).to_string();
                        s.push_str(&numbered(choices, &[chosen]));
                    } else {
                        let answer = answers.card_answer(index).unwrap_or_default();
                        let _ = writeln!(s, "Ditt svar: {}", self.secret(answer));
                    }
                }
            },
            Section::Soothing => {
                s.push_str("Trygghetskit: välj 3-5 som brukar hjälpa.\n");
                s.push_str(&numbered(&SOOTHING_OPTIONS, answers.soothing_kit()));
            }
            Section::Letter => {
                s.push_str("Brev till mig själv (framtida jag, 6 månader fram).\n");
                let _ = writeln!(s, "Ditt brev: {}", self.secret(answers.self_letter()));
                s.push_str("Varje rad läggs till. Kommandon: :n, :b, :rensa\n");
            }
            Section::Summary => {
                let scores = session.scores();
                for (label, value) in scores.entries() {
                    let _ = writeln!(s, "  {}: {:.1}/10", label, value);
                }
                let _ = writeln!(s, "\n{}\n", score_bars(&scores));
                s.push_str("Kommandon: dela, exportera, omstart\n");
            }
        }
        s
    }
}

impl<W: Write> SessionRenderer for TerminalRenderer<W> {
    fn render(&mut self, session: &ReflectionSession, event: &SessionEvent) {
        match event {
            SessionEvent::Navigated {
                outcome: NavigationOutcome::ConsentRequired,
            } => self.notice("Kryssa i 'ja' för att starta resan."),
            SessionEvent::Navigated {
                outcome: NavigationOutcome::Unchanged { .. },
            } => {}
            SessionEvent::CardDrawn { .. }
            | SessionEvent::Navigated { .. }
            | SessionEvent::SessionReset
            | SessionEvent::QuickExit => self.show(session),
            SessionEvent::ThemeChanged { theme } => {
                self.notice(&format!("Tema: {}", theme));
            }
            SessionEvent::ProfileUpdated | SessionEvent::AnswerRecorded { .. } => {
                self.notice("Sparat.");
            }
        }
    }

    fn apply_theme(&mut self, theme: Theme, private_mode: bool) {
        self.theme = theme;
        self.private_mode = private_mode;
    }

    fn report_error(&mut self, _session: &ReflectionSession, error: &DomainError) {
        self.notice(&format!("Det gick inte: {}", error.message));
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "på"
    } else {
        "av"
    }
}

fn numbered(options: &[&str], chosen: &[String]) -> String {
    let mut s = String::new();
    for (i, option) in options.iter().enumerate() {
        let mark = if chosen.iter().any(|c| c == option) {
            "x"
        } else {
            " "
        };
        let _ = writeln!(s, "  [{}] {}. {}", mark, i + 1, option);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::AnswerInput;

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn shows_progress_and_section_header() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.show(&ReflectionSession::new());
        let text = output(renderer);
        assert!(text.contains("Steg 1 / 11"));
        assert!(text.contains("🌿 Intro"));
    }

    #[test]
    fn private_mode_hides_free_text() {
        let mut session = ReflectionSession::new();
        session.update_profile("", true, true).unwrap();
        session.jump_to("letter").unwrap();
        session
            .record(AnswerInput::SelfLetter("hemligt".to_string()))
            .unwrap();

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.apply_theme(Theme::Dark, true);
        renderer.show(&session);
        assert!(!output(renderer).contains("hemligt"));

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.apply_theme(Theme::Dark, false);
        renderer.show(&session);
        assert!(output(renderer).contains("hemligt"));
    }

    #[test]
    fn summary_shows_bars() {
        let mut session = ReflectionSession::new();
        session.update_profile("", true, true).unwrap();
        session.jump_to("summary").unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.show(&session);
        let text = output(renderer);
        assert!(text.contains("Gränser: 5.0/10"));
        assert!(text.contains("█████░░░░░  5.0/10"));
    }

    #[test]
    fn panic_mode_shows_only_calm_screen() {
        let mut session = ReflectionSession::new();
        session.quick_exit();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&session, &SessionEvent::QuickExit);
        let text = output(renderer);
        assert!(text.contains(CALM_MESSAGE));
        assert!(!text.contains("Steg"));
    }
}
