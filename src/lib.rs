//! TUI Quiz (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_quiz::{core,engine,input,scenes,term,types}` and holds the
//! pieces shared by the binaries (CLI, logging, profiler).

pub mod cli;
pub mod logging;
pub mod profile;

pub use tui_quiz_core as core;
pub use tui_quiz_engine as engine;
pub use tui_quiz_input as input;
pub use tui_quiz_scenes as scenes;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;
