//! Wipes that reveal the new frame over the old one, region by region.

use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, Event, Viewport};
use crate::Next;

use super::{tick_next, Transition};

const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
const FAINT_GREEN: Rgb = Rgb::new(0x00, 0x33, 0x00);

const RAIN_GLYPHS: &[char] = &[
    'ｦ', 'ｧ', 'ｨ', 'ｩ', 'ｪ', 'ｫ', 'ｬ', 'ｭ', 'ｮ', 'ｯ', 'ｰ', 'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ',
    'ｸ', 'ｹ',
];
const RAIN_TRAIL: i32 = 8;

/// Copy one row of `frame` into `c`, optionally restyled.
fn copy_row(c: &mut Canvas, frame: &Canvas, y: i32, style: Option<CellStyle>) {
    for x in 0..i32::from(c.width()) {
        let mut cell = fx::frame_cell(frame, x, y);
        if let Some(style) = style {
            cell.style = style;
        }
        c.set(x, y, cell);
    }
}

/// Falling code columns; the new frame appears behind them.
#[derive(Debug, Default)]
pub struct MatrixWipe {
    old: Canvas,
    new: Canvas,
    ticks: u32,
    done: bool,
}

impl MatrixWipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row reached by column `x`'s wipe front.
    fn front(&self, x: u32) -> i32 {
        let speed = 2 + fx::noise(x, 0, 11) % 4;
        let delay = (fx::noise(x, 1, 13) % 20) as i32;
        (self.ticks * speed / 4) as i32 - delay
    }
}

impl Transition for MatrixWipe {
    fn name(&self) -> &str {
        "Matrix Wipe"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16 && caps.has_unicode
    }

    fn set_content(&mut self, old: Canvas, new: Canvas) {
        self.old = old;
        self.new = new;
    }

    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            self.ticks += 1;
            let h = i32::from(self.old.height().max(self.new.height()));
            let w = u32::from(self.old.width().max(self.new.width()));
            self.done = (0..w).all(|x| self.front(x) >= h);
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.done
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        for x in 0..i32::from(viewport.width) {
            let front = self.front(x as u32);
            for y in 0..i32::from(viewport.height) {
                if y < front {
                    c.set(x, y, fx::frame_cell(&self.new, x, y));
                } else if y < front + RAIN_TRAIL {
                    let ch = fx::noise_char(RAIN_GLYPHS, x as u32, y as u32, self.ticks);
                    let color = if y == front { Rgb::WHITE } else { GREEN };
                    c.set_char(x, y, ch, CellStyle::fg(color));
                } else {
                    let mut cell = fx::frame_cell(&self.old, x, y);
                    cell.style = CellStyle::fg(FAINT_GREEN);
                    c.set(x, y, cell);
                }
            }
        }
        c
    }
}

/// A bright bar sweeps down; above it is the new frame, below it the dimmed old one.
#[derive(Debug, Default)]
pub struct ScanLine {
    old: Canvas,
    new: Canvas,
    scan_y: i32,
}

impl ScanLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transition for ScanLine {
    fn name(&self) -> &str {
        "Scan Line"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16
    }

    fn set_content(&mut self, old: Canvas, new: Canvas) {
        self.old = old;
        self.new = new;
    }

    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            self.scan_y += 1;
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.scan_y > i32::from(self.old.height().max(self.new.height()))
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        for y in 0..i32::from(viewport.height) {
            if y < self.scan_y {
                copy_row(&mut c, &self.new, y, None);
            } else if y == self.scan_y {
                c.fill(
                    0,
                    y,
                    i32::from(viewport.width),
                    1,
                    ' ',
                    CellStyle::new(Rgb::WHITE, Rgb::WHITE),
                );
            } else {
                copy_row(&mut c, &self.old, y, Some(CellStyle::default().dim()));
            }
        }
        c
    }
}

const BLIND_HEIGHT: i32 = 4;
const BLIND_START: u32 = 8;
const BLIND_STAGGER: u32 = 2;
const BLIND_CLOSING: u32 = 2;

/// Horizontal slats flip from old to new, top to bottom.
#[derive(Debug, Default)]
pub struct Blinds {
    old: Canvas,
    new: Canvas,
    ticks: u32,
}

impl Blinds {
    pub fn new() -> Self {
        Self::default()
    }

    fn flip_tick(blind: u32) -> u32 {
        BLIND_START + blind * BLIND_STAGGER
    }
}

impl Transition for Blinds {
    fn name(&self) -> &str {
        "Blinds"
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
            self.ticks += 1;
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        let h = i32::from(self.old.height().max(self.new.height()));
        let last = (h.max(1) - 1) / BLIND_HEIGHT;
        self.ticks >= Self::flip_tick(last as u32)
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        for y in 0..i32::from(viewport.height) {
            let flip = Self::flip_tick((y / BLIND_HEIGHT) as u32);
            if self.ticks >= flip {
                copy_row(&mut c, &self.new, y, None);
            } else if self.ticks + BLIND_CLOSING >= flip {
                c.fill(0, y, i32::from(viewport.width), 1, '-', CellStyle::default());
            } else {
                copy_row(&mut c, &self.old, y, None);
            }
        }
        c
    }
}
