//! Terminal rendering layer for the quiz.
//!
//! Themes and transitions draw into a [`Canvas`]; the [`TerminalRenderer`] flushes
//! canvases to the terminal, diffing successive frames and downgrading colors to
//! whatever the probed [`ColorProfile`](types::ColorProfile) allows.
//!
//! - [`canvas`]: cell grid with bounds-checked drawing primitives
//! - [`color`]: truecolor to 256/16/none downgrade
//! - [`renderer`]: alternate screen, raw mode, diff flushing
//! - [`caps`]: capability probe

pub mod canvas;
pub mod caps;
pub mod color;
pub mod renderer;

pub use tui_quiz_types as types;

pub use canvas::{BoxGlyphs, Canvas, Cell, CellStyle, Rgb};
pub use caps::{detect, detect_from_inputs, DetectInputs};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
