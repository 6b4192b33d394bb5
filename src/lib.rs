//! MirrorGarden - Guided self-reflection questionnaire
//!
//! A linear wizard collects answers across ten themed steps, derives five
//! scores from the slider answers, and packs the whole session into a
//! compressed token that can travel in a URL and reopen as a read-only report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
