//! Theme contract and the built-in themes.
//!
//! Every theme declares a [`LayoutBudget`] for a viewport. The question text a theme
//! receives in [`Theme::view`] has already been fitted to that budget (lines separated
//! by `\n`), so a theme only has to place lines, never measure them.

mod console;
mod dos;
mod matrix;
mod pipboy;
mod shell;
mod wopr;

pub use console::{
    amiga, atari, c64, gameboy, nes, targeting_computer, ConsoleConfig, ConsoleTheme,
};
pub use dos::DosTheme;
pub use matrix::MatrixTheme;
pub use pipboy::PipBoyTheme;
pub use shell::RootShellTheme;
pub use wopr::WoprTheme;

use crate::term::Canvas;
use crate::types::{Capabilities, Event, LayoutBudget, Question, Viewport};
use crate::Next;

/// A full-screen renderer for the active question.
pub trait Theme {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn is_compatible(&self, caps: &Capabilities) -> bool;

    /// Space available for question text in `viewport`. Must be pure.
    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget;

    fn init(&mut self) -> Next {
        Next::Tick
    }

    /// Advance animation state. The default keeps ticking and ignores everything else.
    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            Next::Tick
        } else {
            Next::Idle
        }
    }

    /// Draw a frame. `question.text` is the fitted (and possibly partially revealed)
    /// text; `input` is already sanitized for display.
    fn view(
        &self,
        viewport: Viewport,
        question: &Question,
        input: &str,
        hint: Option<&str>,
    ) -> Canvas;
}

/// `total` minus `reserved`, never below zero.
pub(crate) fn remaining(total: u16, reserved: usize) -> usize {
    usize::from(total).saturating_sub(reserved)
}
