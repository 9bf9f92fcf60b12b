use crate::fx;
use crate::term::Canvas;
use crate::types::{Capabilities, Event, Viewport};
use crate::Next;

use super::{tick_next, Transition};

const STEP: u32 = 20;
const END: u32 = 1200;

/// Cells swap from old to new in a fixed pseudo-random order.
#[derive(Debug, Default)]
pub struct PixelDissolve {
    old: Canvas,
    new: Canvas,
    progress: u32,
}

impl PixelDissolve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-mille threshold at which cell `(x, y)` flips.
    fn threshold(x: i32, y: i32) -> u32 {
        ((x * 57 + y * 13).rem_euclid(100) as u32) * 10
    }
}

impl Transition for PixelDissolve {
    fn name(&self) -> &str {
        "Pixel Dissolve"
    }

    fn is_compatible(&self, _caps: &Capabilities) -> bool {
        true
    }

    fn set_content(&mut self, old: Canvas, new: Canvas) {
        self.old = old;
        self.new = new;
    }

    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            self.progress = (self.progress + STEP).min(END);
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.progress >= END
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        for y in 0..i32::from(viewport.height) {
            for x in 0..i32::from(viewport.width) {
                let src = if Self::threshold(x, y) < self.progress {
                    &self.new
                } else {
                    &self.old
                };
                c.set(x, y, fx::frame_cell(src, x, y));
            }
        }
        c
    }
}
