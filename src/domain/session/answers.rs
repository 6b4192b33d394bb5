//! AnswerStore - everything the user has entered, keyed by stable wire names.
//!
//! Keys are absent until the owning step writes them. Readers go through the
//! default-on-read helpers, so callers never see a missing key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{Section, SliderValue, ValidationError};

use super::catalog::{
    AttachmentStyle, BOUNDARY_STATEMENTS, MAX_TOP_VALUES, REFLECTION_CARDS, SOOTHING_OPTIONS,
    TIMELINE_SLOTS, VALUES_POOL,
};

/// Number of boundary sliders.
pub const BOUNDARY_ITEMS: usize = BOUNDARY_STATEMENTS.len();

/// Number of sliders per attachment category.
pub const ATTACHMENT_ITEMS: usize = 3;

/// Value shown on an attachment slider that has not been touched.
const ATTACHMENT_SLIDER_DEFAULT: i64 = 3;

/// Identifies one entry of the answer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    GroundingNotes,
    #[serde(rename = "timeline_points")]
    Timeline,
    InnerCritic,
    InnerAlly,
    #[serde(rename = "boundaries_scores")]
    Boundaries,
    #[serde(rename = "attachment_scores")]
    Attachment,
    TopValues,
    ValuesWhy,
    ReflectionCards,
    SoothingKit,
    SelfLetter,
}

impl AnswerKey {
    /// Returns the wire name used in exports.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AnswerKey::GroundingNotes => "grounding_notes",
            AnswerKey::Timeline => "timeline_points",
            AnswerKey::InnerCritic => "inner_critic",
            AnswerKey::InnerAlly => "inner_ally",
            AnswerKey::Boundaries => "boundaries_scores",
            AnswerKey::Attachment => "attachment_scores",
            AnswerKey::TopValues => "top_values",
            AnswerKey::ValuesWhy => "values_why",
            AnswerKey::ReflectionCards => "reflection_cards",
            AnswerKey::SoothingKit => "soothing_kit",
            AnswerKey::SelfLetter => "self_letter",
        }
    }

    /// Returns the step that owns this key.
    pub fn section(&self) -> Section {
        match self {
            AnswerKey::GroundingNotes => Section::Ground,
            AnswerKey::Timeline => Section::Timeline,
            AnswerKey::InnerCritic | AnswerKey::InnerAlly => Section::Voices,
            AnswerKey::Boundaries => Section::Boundaries,
            AnswerKey::Attachment => Section::Attachment,
            AnswerKey::TopValues | AnswerKey::ValuesWhy => Section::Values,
            AnswerKey::ReflectionCards => Section::Cards,
            AnswerKey::SoothingKit => Section::Soothing,
            AnswerKey::SelfLetter => Section::Letter,
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Accumulated answers for one session.
///
/// Field order is the export key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grounding_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeline_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inner_critic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inner_ally: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boundaries_scores: Option<Vec<SliderValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment_scores: Option<BTreeMap<AttachmentStyle, Vec<SliderValue>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values_why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reflection_cards: Option<BTreeMap<usize, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    soothing_kit: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    self_letter: Option<String>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no key has been written.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Removes every answer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ───────────────────────────────────────────────────────────────
    // Default-on-read accessors
    // ───────────────────────────────────────────────────────────────

    pub fn grounding_notes(&self) -> &str {
        self.grounding_notes.as_deref().unwrap_or_default()
    }

    /// Returns the three timeline slots; unwritten slots are empty.
    pub fn timeline(&self) -> [&str; TIMELINE_SLOTS] {
        let mut slots = [""; TIMELINE_SLOTS];
        if let Some(points) = &self.timeline_points {
            for (slot, point) in slots.iter_mut().zip(points) {
                *slot = point.as_str();
            }
        }
        slots
    }

    pub fn inner_critic(&self) -> &str {
        self.inner_critic.as_deref().unwrap_or_default()
    }

    pub fn inner_ally(&self) -> &str {
        self.inner_ally.as_deref().unwrap_or_default()
    }

    /// Returns the eight boundary sliders, padded with the midpoint.
    pub fn boundary_sliders(&self) -> [SliderValue; BOUNDARY_ITEMS] {
        pad(self.boundaries_scores.as_deref(), SliderValue::MIDPOINT)
    }

    /// Returns the three sliders of one attachment category, padded with 3.
    pub fn attachment_sliders(&self, style: AttachmentStyle) -> [SliderValue; ATTACHMENT_ITEMS] {
        pad(
            self.attachment_values(style),
            SliderValue::new(ATTACHMENT_SLIDER_DEFAULT),
        )
    }

    /// Returns the stored boundary list without defaults.
    pub fn boundary_values(&self) -> Option<&[SliderValue]> {
        self.boundaries_scores.as_deref()
    }

    /// Returns the stored list of one attachment category without defaults.
    pub fn attachment_values(&self, style: AttachmentStyle) -> Option<&[SliderValue]> {
        self.attachment_scores
            .as_ref()
            .and_then(|scores| scores.get(&style))
            .map(Vec::as_slice)
    }

    pub fn top_values(&self) -> &[String] {
        self.top_values.as_deref().unwrap_or_default()
    }

    pub fn values_why(&self) -> &str {
        self.values_why.as_deref().unwrap_or_default()
    }

    /// Returns the stored answer for a card, if any.
    pub fn card_answer(&self, index: usize) -> Option<&str> {
        self.reflection_cards
            .as_ref()
            .and_then(|cards| cards.get(&index))
            .map(String::as_str)
    }

    /// Returns the answer a card shows when opened.
    ///
    /// An unanswered choice card shows its first option.
    pub fn card_answer_or_default(&self, index: usize) -> &str {
        self.card_answer(index).unwrap_or_else(|| {
            REFLECTION_CARDS
                .get(index)
                .and_then(|card| card.choices())
                .and_then(|choices| choices.first().copied())
                .unwrap_or_default()
        })
    }

    /// Returns answered cards in index order.
    pub fn card_answers(&self) -> impl Iterator<Item = (usize, &str)> {
        self.reflection_cards
            .iter()
            .flatten()
            .map(|(index, answer)| (*index, answer.as_str()))
    }

    pub fn soothing_kit(&self) -> &[String] {
        self.soothing_kit.as_deref().unwrap_or_default()
    }

    pub fn self_letter(&self) -> &str {
        self.self_letter.as_deref().unwrap_or_default()
    }

    // ───────────────────────────────────────────────────────────────
    // Validated setters
    // ───────────────────────────────────────────────────────────────

    pub fn set_grounding_notes(&mut self, text: impl Into<String>) {
        self.grounding_notes = Some(text.into());
    }

    /// Writes one timeline slot (0-based).
    pub fn set_timeline_point(
        &mut self,
        slot: usize,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        check_index("timeline_points", slot, TIMELINE_SLOTS)?;
        let points = self
            .timeline_points
            .get_or_insert_with(|| vec![String::new(); TIMELINE_SLOTS]);
        points.resize(TIMELINE_SLOTS, String::new());
        points[slot] = text.into();
        Ok(())
    }

    pub fn set_inner_critic(&mut self, text: impl Into<String>) {
        self.inner_critic = Some(text.into());
    }

    pub fn set_inner_ally(&mut self, text: impl Into<String>) {
        self.inner_ally = Some(text.into());
    }

    /// Sets one boundary slider. The value is clamped to the scale.
    pub fn set_boundary(&mut self, item: usize, value: i64) -> Result<(), ValidationError> {
        check_index("boundaries_scores", item, BOUNDARY_ITEMS)?;
        let mut sliders = self.boundary_sliders();
        sliders[item] = SliderValue::new(value);
        self.boundaries_scores = Some(sliders.to_vec());
        Ok(())
    }

    /// Sets one slider of an attachment category. The value is clamped to the scale.
    pub fn set_attachment(
        &mut self,
        style: AttachmentStyle,
        item: usize,
        value: i64,
    ) -> Result<(), ValidationError> {
        check_index("attachment_scores", item, ATTACHMENT_ITEMS)?;
        let mut sliders = self.attachment_sliders(style);
        sliders[item] = SliderValue::new(value);
        self.attachment_scores
            .get_or_insert_with(BTreeMap::new)
            .insert(style, sliders.to_vec());
        Ok(())
    }

    /// Replaces the chosen values. At most six distinct entries from the pool.
    pub fn set_top_values(&mut self, values: Vec<String>) -> Result<(), ValidationError> {
        if values.len() > MAX_TOP_VALUES {
            return Err(ValidationError::out_of_range(
                "top_values",
                0,
                MAX_TOP_VALUES as i32,
                values.len().min(i32::MAX as usize) as i32,
            ));
        }
        check_selection("top_values", &values, &VALUES_POOL)?;
        self.top_values = Some(values);
        Ok(())
    }

    pub fn set_values_why(&mut self, text: impl Into<String>) {
        self.values_why = Some(text.into());
    }

    /// Stores the answer to a reflection card.
    ///
    /// Choice cards accept only their listed options.
    pub fn set_card_answer(
        &mut self,
        index: usize,
        answer: impl Into<String>,
    ) -> Result<(), ValidationError> {
        check_index("reflection_cards", index, REFLECTION_CARDS.len())?;
        let answer = answer.into();
        if let Some(choices) = REFLECTION_CARDS[index].choices() {
            if !choices.contains(&answer.as_str()) {
                return Err(ValidationError::invalid_format(
                    "reflection_cards",
                    format!("'{}' is not an option of card {}", answer, index),
                ));
            }
        }
        self.reflection_cards
            .get_or_insert_with(BTreeMap::new)
            .insert(index, answer);
        Ok(())
    }

    /// Replaces the soothing kit. Distinct entries from the options list.
    pub fn set_soothing_kit(&mut self, items: Vec<String>) -> Result<(), ValidationError> {
        check_selection("soothing_kit", &items, &SOOTHING_OPTIONS)?;
        self.soothing_kit = Some(items);
        Ok(())
    }

    pub fn set_self_letter(&mut self, text: impl Into<String>) {
        self.self_letter = Some(text.into());
    }

    /// Checks the structural constraints of a store that did not pass through
    /// the setters, e.g. one decoded from a share token.
    ///
    /// Slider lists may be empty but otherwise must have their full length.
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        if let Some(points) = &self.timeline_points {
            check_len("timeline_points", points.len(), TIMELINE_SLOTS)?;
        }
        if let Some(scores) = &self.boundaries_scores {
            check_slider_list("boundaries_scores", scores, BOUNDARY_ITEMS)?;
        }
        for scores in self.attachment_scores.iter().flat_map(BTreeMap::values) {
            check_slider_list("attachment_scores", scores, ATTACHMENT_ITEMS)?;
        }
        if let Some(values) = &self.top_values {
            if values.len() > MAX_TOP_VALUES {
                return Err(ValidationError::invalid_format(
                    "top_values",
                    "too many values",
                ));
            }
        }
        if let Some(cards) = &self.reflection_cards {
            if let Some(index) = cards.keys().find(|&&i| i >= REFLECTION_CARDS.len()) {
                return Err(ValidationError::invalid_format(
                    "reflection_cards",
                    format!("unknown card {}", index),
                ));
            }
        }
        Ok(())
    }
}

/// One answer written by the active step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    GroundingNotes(String),
    TimelinePoint { slot: usize, text: String },
    InnerCritic(String),
    InnerAlly(String),
    Boundary { item: usize, value: i64 },
    Attachment { style: AttachmentStyle, item: usize, value: i64 },
    TopValues(Vec<String>),
    ValuesWhy(String),
    CardAnswer { index: usize, answer: String },
    SoothingKit(Vec<String>),
    SelfLetter(String),
}

impl AnswerInput {
    /// Returns the key this input writes.
    pub fn key(&self) -> AnswerKey {
        match self {
            AnswerInput::GroundingNotes(_) => AnswerKey::GroundingNotes,
            AnswerInput::TimelinePoint { .. } => AnswerKey::Timeline,
            AnswerInput::InnerCritic(_) => AnswerKey::InnerCritic,
            AnswerInput::InnerAlly(_) => AnswerKey::InnerAlly,
            AnswerInput::Boundary { .. } => AnswerKey::Boundaries,
            AnswerInput::Attachment { .. } => AnswerKey::Attachment,
            AnswerInput::TopValues(_) => AnswerKey::TopValues,
            AnswerInput::ValuesWhy(_) => AnswerKey::ValuesWhy,
            AnswerInput::CardAnswer { .. } => AnswerKey::ReflectionCards,
            AnswerInput::SoothingKit(_) => AnswerKey::SoothingKit,
            AnswerInput::SelfLetter(_) => AnswerKey::SelfLetter,
        }
    }

    /// Writes the input into `store`. The store is unchanged on error.
    pub fn apply_to(self, store: &mut AnswerStore) -> Result<(), ValidationError> {
        match self {
            AnswerInput::GroundingNotes(text) => store.set_grounding_notes(text),
            AnswerInput::TimelinePoint { slot, text } => store.set_timeline_point(slot, text)?,
            AnswerInput::InnerCritic(text) => store.set_inner_critic(text),
            AnswerInput::InnerAlly(text) => store.set_inner_ally(text),
            AnswerInput::Boundary { item, value } => store.set_boundary(item, value)?,
            AnswerInput::Attachment { style, item, value } => {
                store.set_attachment(style, item, value)?
            }
            AnswerInput::TopValues(values) => store.set_top_values(values)?,
            AnswerInput::ValuesWhy(text) => store.set_values_why(text),
            AnswerInput::CardAnswer { index, answer } => store.set_card_answer(index, answer)?,
            AnswerInput::SoothingKit(items) => store.set_soothing_kit(items)?,
            AnswerInput::SelfLetter(text) => store.set_self_letter(text),
        }
        Ok(())
    }
}

fn pad<const N: usize>(stored: Option<&[SliderValue]>, fill: SliderValue) -> [SliderValue; N] {
    let mut sliders = [fill; N];
    for (slot, value) in sliders.iter_mut().zip(stored.unwrap_or_default()) {
        *slot = *value;
    }
    sliders
}

fn check_index(field: &str, index: usize, len: usize) -> Result<(), ValidationError> {
    if index >= len {
        return Err(ValidationError::out_of_range(
            field,
            0,
            len as i32 - 1,
            index.min(i32::MAX as usize) as i32,
        ));
    }
    Ok(())
}

fn check_len(field: &str, actual: usize, expected: usize) -> Result<(), ValidationError> {
    if actual != expected {
        return Err(ValidationError::invalid_format(
            field,
            format!("expected {} entries, got {}", expected, actual),
        ));
    }
    Ok(())
}

fn check_slider_list(
    field: &str,
    values: &[SliderValue],
    expected: usize,
) -> Result<(), ValidationError> {
    if !values.is_empty() {
        check_len(field, values.len(), expected)?;
    }
    if values.iter().any(|v| !v.is_in_range()) {
        return Err(ValidationError::invalid_format(field, "slider outside 0-10"));
    }
    Ok(())
}

fn check_selection(field: &str, items: &[String], pool: &[&str]) -> Result<(), ValidationError> {
    for (i, item) in items.iter().enumerate() {
        if !pool.contains(&item.as_str()) {
            return Err(ValidationError::invalid_format(
                field,
                format!("'{}' is not in the list", item),
            ));
        }
        if items[..i].contains(item) {
            return Err(ValidationError::invalid_format(
                field,
                format!("'{}' chosen twice", item),
            ));
        }
    }
    Ok(())
}
