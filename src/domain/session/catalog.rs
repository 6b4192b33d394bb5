//! Question catalog - the fixed prompts and option pools for each step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of timeline slots on the timeline step.
pub const TIMELINE_SLOTS: usize = 3;

/// Maximum number of values that can be chosen on the values step.
pub const MAX_TOP_VALUES: usize = 6;

/// Statements rated on the boundaries step.
pub const BOUNDARY_STATEMENTS: [&str; 8] = [
    "Jag säger nej utan att förklara mig i situationer där det behövs.",
    "Jag märker tidigt när någon kliver över mina gränser.",
    "Jag tar ansvar för mitt nej, även om andra blir besvikna.",
    "Jag förhandlar när gränser krockar, istället för att ge upp.",
    "Jag vet vad jag behöver för att känna mig trygg i en relation.",
    "Jag sätter tidsgränser när jag hjälper andra.",
    "Jag ber om utrymme när jag är överväldigad.",
    "Jag kan ta emot ett nej utan att ta det personligt.",
];

/// Words offered on the values step.
pub const VALUES_POOL: [&str; 24] = [
    "Frihet",
    "Trygghet",
    "Familj",
    "Rättvisa",
    "Humor",
    "Äventyr",
    "Lojalitet",
    "Självrespekt",
    "Mjukhet",
    "Styrka",
    "Ärlighet",
    "Andlighet",
    "Kreativitet",
    "Ansvar",
    "Lärande",
    "Kärlek",
    "Integritet",
    "Gemenskap",
    "Mod",
    "Tillit",
    "Balans",
    "Framgång",
    "Oberoende",
    "Tålamod",
];

/// Quick-help options offered on the soothing step.
pub const SOOTHING_OPTIONS: [&str; 8] = [
    "Andning: 4-7-8 i 2 minuter",
    "Kropps-scan från huvud till tå",
    "Lugn musik eller favoritdikt",
    "Varm dusch, vätska, något litet att äta",
    "Skriva tre rader: 'Just nu känner jag…,' 'Det betyder…,' 'Jag behöver…'",
    "Meddela en vän: 'Jag vill bara att du lyssnar'",
    "Gå en 10-minuters promenad utan mobil",
    "Byt miljö: öppet fönster, balkong, ute",
];

/// The four attachment categories on the attachment step.
///
/// Serialized under their Swedish labels, which are also the map keys in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttachmentStyle {
    #[serde(rename = "Trygg")]
    Secure,
    #[serde(rename = "Ambivalent/Anxious")]
    Anxious,
    #[serde(rename = "Undvikande")]
    Avoidant,
    #[serde(rename = "Rädd/Desorganiserad")]
    Fearful,
}

impl AttachmentStyle {
    /// All categories in display order.
    pub const ALL: [AttachmentStyle; 4] = [
        AttachmentStyle::Secure,
        AttachmentStyle::Anxious,
        AttachmentStyle::Avoidant,
        AttachmentStyle::Fearful,
    ];

    /// Returns the category label.
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentStyle::Secure => "Trygg",
            AttachmentStyle::Anxious => "Ambivalent/Anxious",
            AttachmentStyle::Avoidant => "Undvikande",
            AttachmentStyle::Fearful => "Rädd/Desorganiserad",
        }
    }

    /// Returns the statements rated for this category.
    pub fn statements(&self) -> &'static [&'static str; 3] {
        match self {
            AttachmentStyle::Secure => &[
                "Jag känner mig värd kärlek även när saker går fel.",
                "Jag kan vara nära utan att tappa mig själv.",
                "Jag uttrycker behov utan skam.",
            ],
            AttachmentStyle::Anxious => &[
                "Jag blir orolig när svar dröjer.",
                "Jag överanalyserar lätt tonfall och emojis.",
                "Jag söker ofta bekräftelse när jag känner mig osäker.",
            ],
            AttachmentStyle::Avoidant => &[
                "Jag behöver mycket egen tid för att känna mig okej.",
                "Jag blir kvävd när någon vill 'definiera' relationen snabbt.",
                "Jag håller ofta känslor för mig själv.",
            ],
            AttachmentStyle::Fearful => &[
                "Jag vill vara nära men växlar snabbt till att dra mig undan.",
                "Intimitet kan trigga min kamp/flykt-reaktion.",
                "Jag testar andra för att se om de stannar.",
            ],
        }
    }

    /// Looks up a category by its label.
    pub fn from_label(label: &str) -> Option<AttachmentStyle> {
        Self::ALL.into_iter().find(|style| style.label() == label)
    }
}

impl fmt::Display for AttachmentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a reflection card is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Text,
    Choice(&'static [&'static str]),
}

/// A prompt on the reflection cards step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionCard {
    pub prompt: &'static str,
    pub mode: CardMode,
}

impl ReflectionCard {
    const fn text(prompt: &'static str) -> Self {
        Self {
            prompt,
            mode: CardMode::Text,
        }
    }

    /// Returns the options of a choice card, or None for a text card.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self.mode {
            CardMode::Choice(choices) => Some(choices),
            CardMode::Text => None,
        }
    }
}

/// The reflection deck, in draw order.
pub static REFLECTION_CARDS: [ReflectionCard; 8] = [
    ReflectionCard::text("Vilken del av dig förtjänar mer mjukhet just nu?"),
    ReflectionCard::text("När kände du dig som mest levande senaste året – vad hände?"),
    ReflectionCard::text("Om 'trygghet' var en plats, hur ser den ut och vad hörs där?"),
    ReflectionCard::text("Vad är en liten gräns du vill hålla den här veckan?"),
    ReflectionCard {
        prompt: "Vilket av dessa känns mest sant idag?",
        mode: CardMode::Choice(&[
            "Jag behöver vila",
            "Jag behöver kontakt",
            "Jag behöver utrymme",
            "Jag behöver tydlighet",
        ]),
    },
    ReflectionCard::text("Vilken handling skulle framtida-du tacka dig för ikväll?"),
    ReflectionCard::text("Vilken relationell myt vill du släppa?"),
    ReflectionCard::text("Vilken mikro-rutin (≤5 min) kan stötta dig dagligen?"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_style_serializes_to_label() {
        let json = serde_json::to_string(&AttachmentStyle::Fearful).unwrap();
        assert_eq!(json, "\"Rädd/Desorganiserad\"");
    }

    #[test]
    fn attachment_style_from_label_roundtrips() {
        for style in AttachmentStyle::ALL {
            assert_eq!(AttachmentStyle::from_label(style.label()), Some(style));
        }
        assert_eq!(AttachmentStyle::from_label("Okänd"), None);
    }

    #[test]
    fn exactly_one_choice_card() {
        let choice_cards: Vec<_> = REFLECTION_CARDS
            .iter()
            .filter(|card| card.choices().is_some())
            .collect();
        assert_eq!(choice_cards.len(), 1);
        assert_eq!(choice_cards[0].choices().map(|c| c.len()), Some(4));
    }

    #[test]
    fn pools_have_no_duplicates() {
        let mut values = VALUES_POOL.to_vec();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), VALUES_POOL.len());
    }
}
