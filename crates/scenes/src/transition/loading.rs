use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, Event, Viewport};
use crate::Next;

use super::{tick_next, Transition};

const MAGENTA: Rgb = Rgb::new(0xFF, 0x00, 0xFF);
const BAR_WIDTH: i32 = 40;
const FULL: u32 = 1000;
const TICK_STEP: u32 = 8;
const KEY_STEP: u32 = 50;

/// Progress bar that fills over time; mashing keys fills it faster.
#[derive(Debug, Default)]
pub struct LoadingBar {
    progress: u32,
}

impl LoadingBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transition for LoadingBar {
    fn name(&self) -> &str {
        "Loading"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.has_unicode
    }

    fn set_content(&mut self, _old: Canvas, _new: Canvas) {}

    fn update(&mut self, event: &Event) -> Next {
        let step = match event {
            Event::Tick => TICK_STEP,
            Event::Input(_) => KEY_STEP,
            Event::Resize(_) => 0,
        };
        self.progress = (self.progress + step).min(FULL);
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.progress >= FULL
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        let style = CellStyle::fg(MAGENTA);

        let bar_w = BAR_WIDTH.min(i32::from(viewport.width) - 4).max(0);
        let filled = (bar_w as u32 * self.progress / FULL) as usize;
        let bar = format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(bar_w as usize - filled)
        );

        let title = "ESTABLISHING CONNECTION...";
        let y = i32::from(viewport.height) / 2 - 1;
        c.set_string(fx::centered(viewport.width, title.len()), y, title, style);
        c.set_string(
            fx::centered(viewport.width, bar_w as usize + 2),
            y + 2,
            &bar,
            style,
        );
        c
    }
}
