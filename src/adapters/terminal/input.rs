//! Line parser for the terminal wizard.
//!
//! Numbers typed by the user are 1-based; the parser converts them to the
//! 0-based indices the domain expects. Range checks are left to the domain.

use crate::application::WizardCommand;
use crate::domain::foundation::Section;
use crate::domain::session::catalog::{SOOTHING_OPTIONS, VALUES_POOL};
use crate::domain::session::{AnswerInput, AttachmentStyle, ReflectionSession};
use crate::domain::share::Theme;

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayAction {
    Command(WizardCommand),
    Share,
    Export,
    Help,
    Quit,
    Invalid(String),
}

/// Parses one line in the context of the session's active step.
///
/// On the free-text steps (grounding and letter) every plain line is text and
/// is appended to the answer; commands there need a leading `:`, e.g. `:n`.
/// A leading `:` is accepted on every step.
pub fn parse_line(session: &ReflectionSession, line: &str) -> PlayAction {
    let line = line.trim();
    let prefixed = line.strip_prefix(':').map(str::trim_start);
    let free_text = !session.is_panic_mode() && is_free_text(session.current_section());

    if let Some(command) = prefixed {
        if command == "rensa" && free_text {
            return record(free_text_input(session.current_section(), String::new()));
        }
        return parse_global(command)
            .unwrap_or_else(|| usage("Okänt kommando. Skriv ':?' för hjälp."));
    }
    if free_text {
        let section = session.current_section();
        let text = append_line(current_text(session, section), line);
        return record(free_text_input(section, text));
    }
    if let Some(action) = parse_global(line) {
        return action;
    }

    if session.is_panic_mode() {
        return PlayAction::Invalid("Skriv 'omstart' för att börja en ny session.".to_string());
    }

    let (head, rest) = split_word(line);
    match session.current_section() {
        Section::Intro => parse_intro(session, head, rest),
        Section::Ground | Section::Letter => usage("Skriv din text."),
        Section::Timeline => match one_based(head) {
            Some(slot) => record(AnswerInput::TimelinePoint {
                slot,
                text: rest.to_string(),
            }),
            None => usage("Skriv t.ex. '1 när jag flyttade hemifrån'."),
        },
        Section::Voices => match head {
            "kritiker" => record(AnswerInput::InnerCritic(rest.to_string())),
            "allierad" => record(AnswerInput::InnerAlly(rest.to_string())),
            _ => usage("Börja raden med 'kritiker' eller 'allierad'."),
        },
        Section::Boundaries => match (one_based(head), rest.parse::<i64>()) {
            (Some(item), Ok(value)) => record(AnswerInput::Boundary { item, value }),
            _ => usage("Skriv påstående och värde, t.ex. '3 7'."),
        },
        Section::Attachment => parse_attachment(line),
        Section::Values => match head {
            "välj" => match pick(rest, &VALUES_POOL) {
                Some(values) => record(AnswerInput::TopValues(values)),
                None => usage("Skriv 'välj' följt av nummer, t.ex. 'välj 1 4 9'."),
            },
            "varför" => record(AnswerInput::ValuesWhy(rest.to_string())),
            _ => usage("Använd 'välj 1 4 9' eller 'varför ...'."),
        },
        Section::Cards => parse_card(session, head, rest),
        Section::Soothing => match head {
            "välj" => match pick(rest, &SOOTHING_OPTIONS) {
                Some(items) => record(AnswerInput::SoothingKit(items)),
                None => usage("Skriv 'välj' följt av nummer, t.ex. 'välj 1 3 5'."),
            },
            _ => usage("Skriv 'välj' följt av nummer, t.ex. 'välj 1 3 5'."),
        },
        Section::Summary => usage("Skriv 'dela', 'exportera' eller 'omstart'."),
    }
}

/// Commands that work on every step.
fn parse_global(line: &str) -> Option<PlayAction> {
    let (head, rest) = split_word(line);
    let action = match head.to_lowercase().as_str() {
        "n" | "nästa" => PlayAction::Command(WizardCommand::Advance),
        "b" | "bakåt" => PlayAction::Command(WizardCommand::Retreat),
        "gå" => PlayAction::Command(WizardCommand::JumpTo(rest.to_string())),
        "tema" => match rest {
            "ljust" => PlayAction::Command(WizardCommand::SetTheme(Theme::Light)),
            "mörkt" => PlayAction::Command(WizardCommand::SetTheme(Theme::Dark)),
            _ => usage("Skriv 'tema ljust' eller 'tema mörkt'."),
        },
        "!" | "exit!" => PlayAction::Command(WizardCommand::QuickExit),
        "omstart" => PlayAction::Command(WizardCommand::Reset),
        "dela" => PlayAction::Share,
        "exportera" => PlayAction::Export,
        "?" | "hjälp" => PlayAction::Help,
        "q" | "avsluta" => PlayAction::Quit,
        _ => return None,
    };
    Some(action)
}

fn is_free_text(section: Section) -> bool {
    matches!(section, Section::Ground | Section::Letter)
}

fn current_text(session: &ReflectionSession, section: Section) -> &str {
    match section {
        Section::Ground => session.answers().grounding_notes(),
        _ => session.answers().self_letter(),
    }
}

fn free_text_input(section: Section, text: String) -> AnswerInput {
    match section {
        Section::Ground => AnswerInput::GroundingNotes(text),
        _ => AnswerInput::SelfLetter(text),
    }
}

fn append_line(existing: &str, line: &str) -> String {
    if existing.is_empty() {
        line.to_string()
    } else {
        format!("{}\n{}", existing, line)
    }
}

fn parse_intro(session: &ReflectionSession, head: &str, rest: &str) -> PlayAction {
    let profile = session.profile();
    let mut name = profile.name.clone();
    let mut private_mode = profile.private_mode;
    let mut consent_given = profile.consent_given;

    match (head, rest) {
        ("namn", _) => name = rest.to_string(),
        ("privat", "på") => private_mode = true,
        ("privat", "av") => private_mode = false,
        ("ja", _) => consent_given = true,
        ("nej", _) => consent_given = false,
        _ => return usage("Använd 'namn ...', 'privat på|av', 'ja' eller 'nej'."),
    }

    PlayAction::Command(WizardCommand::UpdateProfile {
        name,
        private_mode,
        consent_given,
    })
}

fn parse_attachment(line: &str) -> PlayAction {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let parsed = match parts.as_slice() {
        [category, item, value] => one_based(category)
            .and_then(|c| AttachmentStyle::ALL.get(c).copied())
            .zip(one_based(item))
            .zip(value.parse::<i64>().ok()),
        _ => None,
    };
    match parsed {
        Some(((style, item), value)) => record(AnswerInput::Attachment { style, item, value }),
        None => usage("Skriv kategori, påstående och värde, t.ex. '2 1 6'."),
    }
}

fn parse_card(session: &ReflectionSession, head: &str, rest: &str) -> PlayAction {
    match head {
        "dra" => PlayAction::Command(WizardCommand::DrawCard),
        "svar" => {
            let (Some(index), Some(card)) = (session.deck().current_index(), session.deck().current())
            else {
                return usage("Skriv 'dra' för att dra ett kort först.");
            };
            let answer = match card.choices() {
                Some(choices) => match one_based(rest).and_then(|i| choices.get(i)) {
                    Some(choice) => choice.to_string(),
                    None => return usage("Välj ett alternativ med dess nummer."),
                },
                None => rest.to_string(),
            };
            record(AnswerInput::CardAnswer { index, answer })
        }
        _ => usage("Använd 'dra' eller 'svar ...'."),
    }
}

fn record(input: AnswerInput) -> PlayAction {
    PlayAction::Command(WizardCommand::Record(input))
}

fn usage(text: &str) -> PlayAction {
    PlayAction::Invalid(text.to_string())
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

fn one_based(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn pick(numbers: &str, pool: &[&str]) -> Option<Vec<String>> {
    numbers
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| one_based(part).and_then(|i| pool.get(i)).map(|s| s.to_string()))
        .collect()
}
