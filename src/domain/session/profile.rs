//! ProfileState - who the user is and how they want the session to look.

use serde::{Deserialize, Serialize};

use crate::domain::share::Theme;

/// Default interface language.
pub const DEFAULT_LANGUAGE: &str = "sv";

/// User identity and preferences for one session.
///
/// Written by the intro step (name, privacy, consent) and the theme toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Preferred name, trimmed; may be empty.
    pub name: String,
    /// Interface language code.
    pub language: String,
    /// Whether the user accepted the intro disclaimer.
    #[serde(rename = "consent")]
    pub consent_given: bool,
    /// Hide sensitive fields in public surroundings.
    pub private_mode: bool,
    /// Light colour scheme instead of dark.
    pub light_theme: bool,
}

impl ProfileState {
    /// Returns the name if one was given.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Returns the colour scheme as a theme.
    pub fn theme(&self) -> Theme {
        Theme::from_light_flag(self.light_theme)
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            name: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            consent_given: false,
            private_mode: true,
            light_theme: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_private_dark_and_unconsented() {
        let profile = ProfileState::default();
        assert_eq!(profile.language, "sv");
        assert!(profile.private_mode);
        assert!(!profile.consent_given);
        assert_eq!(profile.theme(), Theme::Dark);
    }

    #[test]
    fn display_name_ignores_blank_names() {
        let mut profile = ProfileState::default();
        assert_eq!(profile.display_name(), None);
        profile.name = "  Alva ".to_string();
        assert_eq!(profile.display_name(), Some("Alva"));
    }

    #[test]
    fn consent_uses_short_wire_name() {
        let json = serde_json::to_value(ProfileState::default()).unwrap();
        assert_eq!(json["consent"], false);
        assert!(json.get("consent_given").is_none());
    }
}
