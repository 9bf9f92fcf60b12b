//! Transition contract and the built-in transitions.
//!
//! A transition receives two captured frames through [`Transition::set_content`]:
//! the screen as it was when the answer was accepted, and a preview of the next
//! question with nothing revealed yet. It then animates between them until
//! [`Transition::done`] reports true.

mod crt;
mod dissolve;
mod loading;
mod tictactoe;
mod wipes;

pub use crt::CrtPowerOff;
pub use dissolve::PixelDissolve;
pub use loading::LoadingBar;
pub use tictactoe::TicTacToe;
pub use wipes::{Blinds, MatrixWipe, ScanLine};

use crate::term::Canvas;
use crate::types::{Capabilities, Event, Viewport};
use crate::Next;

/// An animated bridge between two frames.
pub trait Transition {
    fn name(&self) -> &str;

    fn is_compatible(&self, caps: &Capabilities) -> bool;

    /// Hand over the outgoing and incoming frames. Called once, before `init`.
    fn set_content(&mut self, old: Canvas, new: Canvas);

    fn init(&mut self) -> Next {
        Next::Tick
    }

    fn update(&mut self, event: &Event) -> Next;

    fn done(&self) -> bool;

    fn view(&self, viewport: Viewport) -> Canvas;
}

/// Keep ticking on ticks, stay idle otherwise.
pub(crate) fn tick_next(event: &Event) -> Next {
    if event.is_tick() {
        Next::Tick
    } else {
        Next::Idle
    }
}
