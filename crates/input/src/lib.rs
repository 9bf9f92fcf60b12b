//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Input`] and provides the
//! fixed-capacity answer line the player types into.

pub mod line;
pub mod map;

pub use tui_quiz_types as types;

pub use line::{sanitize_for_display, AnswerInput};
pub use map::{map_key, should_quit};
