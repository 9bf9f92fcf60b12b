//! Quiz session engine.
//!
//! [`Model`] is the game state machine. It consumes [`Event`](types::Event)s and
//! answers with [`Commands`]; the caller owns the terminal, the clock and the event
//! queue. Every renderer `view` call is made through [`render_guarded`], so a
//! misbehaving theme or transition degrades to a fallback frame instead of ending
//! the session.

pub mod guard;
pub mod model;
pub mod screens;

pub use tui_quiz_core as core;
pub use tui_quiz_input as input;
pub use tui_quiz_scenes as scenes;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;

pub use guard::{panic_message, render_guarded};
pub use model::{Command, Commands, Completion, Model, ModelOptions, Phase};
