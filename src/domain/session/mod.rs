//! Session domain module.
//!
//! The reflection session aggregate together with the state it owns:
//! profile, answers, the question catalog and the reflection deck.
//!
//! # Events
//!
//! Every mutation returns a [`SessionEvent`] describing what changed, which the
//! application layer hands to the renderer.

mod aggregate;
mod answers;
pub mod catalog;
mod deck;
mod events;
mod profile;

pub use aggregate::{ReflectionSession, CALM_MESSAGE};
pub use answers::{AnswerInput, AnswerKey, AnswerStore, ATTACHMENT_ITEMS, BOUNDARY_ITEMS};
pub use catalog::{AttachmentStyle, CardMode, ReflectionCard};
pub use deck::ReflectionDeck;
pub use events::SessionEvent;
pub use profile::{ProfileState, DEFAULT_LANGUAGE};
