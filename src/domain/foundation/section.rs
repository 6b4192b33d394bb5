//! Section enum representing the 11 wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wizard steps, from the intro through the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Intro,
    Ground,
    Timeline,
    Voices,
    Boundaries,
    Attachment,
    Values,
    Cards,
    Soothing,
    Letter,
    Summary,
}

impl Section {
    /// Returns the stable section identifier used in navigation.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Ground => "ground",
            Section::Timeline => "timeline",
            Section::Voices => "voices",
            Section::Boundaries => "boundaries",
            Section::Attachment => "attachment",
            Section::Values => "values",
            Section::Cards => "cards",
            Section::Soothing => "soothing",
            Section::Letter => "letter",
            Section::Summary => "summary",
        }
    }

    /// Looks up a section by its identifier.
    pub fn from_id(id: &str) -> Option<Section> {
        let section = match id {
            "intro" => Section::Intro,
            "ground" => Section::Ground,
            "timeline" => Section::Timeline,
            "voices" => Section::Voices,
            "boundaries" => Section::Boundaries,
            "attachment" => Section::Attachment,
            "values" => Section::Values,
            "cards" => Section::Cards,
            "soothing" => Section::Soothing,
            "letter" => Section::Letter,
            "summary" => Section::Summary,
            _ => return None,
        };
        Some(section)
    }

    /// Returns the display title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Intro => "Intro",
            Section::Ground => "Andnings-ankare",
            Section::Timeline => "Livslinje",
            Section::Voices => "Inre röster",
            Section::Boundaries => "Gränslabb",
            Section::Attachment => "Anknytningskompass",
            Section::Values => "Värdekarta",
            Section::Cards => "Reflektionskort",
            Section::Soothing => "Egen trygghetskit",
            Section::Letter => "Brev till mig själv",
            Section::Summary => "Insiktskarta",
        }
    }

    /// Returns the emoji shown in the step header.
    pub fn emoji(&self) -> &'static str {
        match self {
            Section::Intro => "🌿",
            Section::Ground => "🫁",
            Section::Timeline => "🧭",
            Section::Voices => "🎭",
            Section::Boundaries => "🧱",
            Section::Attachment => "🧲",
            Section::Values => "🧡",
            Section::Cards => "🃏",
            Section::Soothing => "🧰",
            Section::Letter => "✍️",
            Section::Summary => "📜",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
