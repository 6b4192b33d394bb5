//! SessionSnapshot - the frozen, exportable view of one session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::scoring::{compute_scores, Scores};
use crate::domain::session::{AnswerStore, ProfileState};

/// Application name written into every export.
pub const APP_NAME: &str = "MirrorGarden";

/// Export format version.
pub const APP_VERSION: &str = "1.2.0";

/// Identifies the producer of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
        }
    }
}

/// Export metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub app: String,
    pub version: String,
    pub started_at: Timestamp,
    pub exported_at: Timestamp,
}

/// Immutable export of profile, answers and scores.
///
/// Field order is the wire key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    meta: SnapshotMeta,
    profile: ProfileState,
    answers: AnswerStore,
    scores: Scores,
}

impl SessionSnapshot {
    /// Captures the given state, scoring it and stamping the export time.
    pub fn capture(
        app: &AppInfo,
        started_at: Timestamp,
        profile: &ProfileState,
        answers: &AnswerStore,
    ) -> Self {
        Self::capture_at(app, started_at, Timestamp::now(), profile, answers)
    }

    /// Like [`capture`](Self::capture) with an explicit export time.
    pub fn capture_at(
        app: &AppInfo,
        started_at: Timestamp,
        exported_at: Timestamp,
        profile: &ProfileState,
        answers: &AnswerStore,
    ) -> Self {
        Self {
            meta: SnapshotMeta {
                app: app.name.clone(),
                version: app.version.clone(),
                started_at,
                exported_at,
            },
            profile: profile.clone(),
            answers: answers.clone(),
            scores: compute_scores(answers),
        }
    }

    pub fn meta(&self) -> &SnapshotMeta {
        &self.meta
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Scores as they were when the snapshot was taken.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Checks the shape constraints a decoded snapshot must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.answers.validate_shape()?;
        self.scores.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::AttachmentStyle;

    fn answers() -> AnswerStore {
        let mut answers = AnswerStore::new();
        answers
            .set_attachment(AttachmentStyle::Secure, 0, 9)
            .unwrap();
        answers.set_self_letter("Kom ihåg att vila.");
        answers
    }

    #[test]
    fn capture_embeds_app_info_and_scores() {
        let started = Timestamp::from_unix_secs(1_700_000_000);
        let snapshot = SessionSnapshot::capture(
            &AppInfo::default(),
            started,
            &ProfileState::default(),
            &answers(),
        );
        assert_eq!(snapshot.meta().app, "MirrorGarden");
        assert_eq!(snapshot.meta().version, "1.2.0");
        assert_eq!(snapshot.meta().started_at, started);
        assert!(!snapshot.meta().exported_at.is_before(&started));
        assert_eq!(*snapshot.scores(), compute_scores(&answers()));
    }

    #[test]
    fn wire_keys_follow_declaration_order() {
        let snapshot = SessionSnapshot::capture(
            &AppInfo::default(),
            Timestamp::now(),
            &ProfileState::default(),
            &answers(),
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        let meta = json.find("\"meta\"").unwrap();
        let profile = json.find("\"profile\"").unwrap();
        let answers = json.find("\"answers\"").unwrap();
        let scores = json.find("\"scores\"").unwrap();
        assert!(meta < profile && profile < answers && answers < scores);
    }

    #[test]
    fn reads_legacy_naive_timestamps() {
        let json = serde_json::json!({
            "meta": {
                "app": "MirrorGarden",
                "version": "1.2.0",
                "started_at": "2024-03-01T10:00:00.123456",
                "exported_at": "2024-03-01T10:20:00"
            },
            "profile": {
                "name": "",
                "language": "sv",
                "consent": true,
                "private_mode": true,
                "light_theme": false
            },
            "answers": {},
            "scores": {
                "Gränser": 4.0,
                "Trygghet": 0,
                "Oro/Anknytning": 0,
                "Avstånd/Undvikande": 0,
                "Ambivalens/Rädsla": 0
            }
        });
        let snapshot: SessionSnapshot = serde_json::from_value(json).unwrap();
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.scores().boundaries, 4.0);
    }
}
