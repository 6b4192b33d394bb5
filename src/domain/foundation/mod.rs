//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the MirrorGarden domain.

mod errors;
mod ids;
mod section;
mod slider_value;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use section::Section;
pub use slider_value::SliderValue;
pub use timestamp::Timestamp;
