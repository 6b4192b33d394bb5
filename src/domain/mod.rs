//! Domain layer containing the reflection model and its pure services.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, ids, sections, slider values, timestamps)
//! - `wizard` - Section ordering and the step sequencer
//! - `session` - Reflection session aggregate, profile, answers and question catalog
//! - `scoring` - Pure scoring of answers and the summary bars
//! - `export` - Snapshots, the share token codec and the Markdown report
//! - `share` - Link parameters and the share link resolver

pub mod export;
pub mod foundation;
pub mod scoring;
pub mod session;
pub mod share;
pub mod wizard;
