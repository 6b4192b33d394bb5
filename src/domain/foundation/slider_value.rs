//! SliderValue value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rating on the 0-10 slider scale used by the boundary and attachment steps.
///
/// Values arriving from deserialization are not trusted: [`SliderValue::value`]
/// always reports a number clamped to the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliderValue(u8);

impl SliderValue {
    /// Lowest point on the scale.
    pub const MIN: Self = Self(0);

    /// Highest point on the scale.
    pub const MAX: Self = Self(10);

    /// Neutral midpoint of the scale.
    pub const MIDPOINT: Self = Self(5);

    /// Creates a new SliderValue, clamping to the valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 10) as u8)
    }

    /// Creates a SliderValue, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "slider",
                0,
                10,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value clamped to 0-10.
    pub fn value(&self) -> u8 {
        self.0.min(Self::MAX.0)
    }

    /// Returns true if the stored raw value lies on the scale.
    pub fn is_in_range(&self) -> bool {
        self.0 <= Self::MAX.0
    }
}

impl Default for SliderValue {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.value())
    }
}
