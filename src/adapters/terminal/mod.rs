//! Terminal adapter - plays the wizard on stdin/stdout.

mod input;
mod play;
mod renderer;

pub use input::{parse_line, PlayAction};
pub use play::{run_play, PlayContext};
pub use renderer::TerminalRenderer;
