//! Adapters - Implementations of ports for external systems.
//!
//! - `storage` - Artifact storage (filesystem, in-memory)
//! - `http` - Shared report host
//! - `terminal` - Interactive wizard on the terminal

pub mod http;
pub mod storage;
pub mod terminal;
