//! Link parameters: the `mode`, `r` and `theme` query keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::export::ShareToken;

/// Value of `mode` that opens the read-only report view.
pub const REPORT_MODE: &str = "report";

/// Colour scheme carried in links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_light_flag(light: bool) -> Self {
        if light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }

    /// Reads a link value. Only `light` selects the light theme.
    pub fn from_param(value: Option<&str>) -> Self {
        Self::from_light_flag(value == Some("light"))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a MirrorGarden link.
///
/// Unknown keys are ignored; missing keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl LinkParams {
    /// Parameters of a share link. All three keys are always set.
    pub fn for_report(token: &ShareToken, theme: Theme) -> Self {
        Self {
            mode: Some(REPORT_MODE.to_string()),
            r: Some(token.as_str().to_string()),
            theme: Some(theme.as_str().to_string()),
        }
    }

    /// Parameters carrying only the theme, as written by the theme toggle.
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Parses a bare query string, with or without the leading `?`.
    ///
    /// A query that cannot be parsed yields empty parameters.
    pub fn parse_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        serde_urlencoded::from_str(query).unwrap_or_default()
    }

    /// Parses the query part of a full URL. Input without `?` is read as a bare query.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::parse_query(query),
            None if without_fragment.contains('=') => Self::parse_query(without_fragment),
            None => Self::default(),
        }
    }

    /// Returns true if the link asks for the report view.
    pub fn is_report(&self) -> bool {
        self.mode.as_deref() == Some(REPORT_MODE)
    }

    /// Returns the token, if present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.r.as_deref().filter(|token| !token.trim().is_empty())
    }

    /// Theme requested by the link, dark by default.
    pub fn theme(&self) -> Theme {
        Theme::from_param(self.theme.as_deref())
    }

    /// Encodes the parameters as a query string without the leading `?`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }

    /// Appends the parameters to `base_url`.
    pub fn to_url(&self, base_url: &str) -> Result<String, serde_urlencoded::ser::Error> {
        let query = self.to_query_string()?;
        if query.is_empty() {
            return Ok(base_url.to_string());
        }
        let separator = if base_url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", base_url, separator, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::from_param(None), Theme::Dark);
        assert_eq!(Theme::from_param(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_param(Some("light")), Theme::Light);
    }

    #[test]
    fn parses_bare_query() {
        let params = LinkParams::parse_query("?mode=report&r=abc_-&theme=light");
        assert!(params.is_report());
        assert_eq!(params.token(), Some("abc_-"));
        assert_eq!(params.theme(), Theme::Light);
    }

    #[test]
    fn parses_full_url_and_percent_decodes() {
        let params =
            LinkParams::from_url("https://garden.example/app?mode=report&r=eJw%3D%3D&x=1#top");
        assert_eq!(params.r.as_deref(), Some("eJw=="));
        assert_eq!(params.theme(), Theme::Dark);
    }

    #[test]
    fn url_without_query_is_empty() {
        assert_eq!(LinkParams::from_url("https://garden.example/"), LinkParams::default());
        assert!(!LinkParams::default().is_report());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let params = LinkParams::parse_query("mode=report&r=");
        assert_eq!(params.token(), None);
    }

    #[test]
    fn report_link_writes_all_three_keys() {
        let token = ShareToken::from("eJxLTEoGAAJNASc".to_string());
        let url = LinkParams::for_report(&token, Theme::Light)
            .to_url("https://garden.example/")
            .unwrap();
        assert_eq!(
            url,
            "https://garden.example/?mode=report&r=eJxLTEoGAAJNASc&theme=light"
        );
        assert_eq!(LinkParams::from_url(&url).token(), Some(token.as_str()));
    }

    #[test]
    fn cleared_params_produce_bare_url() {
        let url = LinkParams::default().to_url("https://garden.example/").unwrap();
        assert_eq!(url, "https://garden.example/");
    }

    #[test]
    fn theme_only_params() {
        let query = LinkParams::for_theme(Theme::Dark).to_query_string().unwrap();
        assert_eq!(query, "theme=dark");
    }
}
