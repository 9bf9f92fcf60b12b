use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, Event, Viewport};
use crate::Next;

use super::{tick_next, Transition};

const SCALE_FULL: u32 = 1000;
const SCALE_STEP: u32 = 100;
const V_MIN: u32 = 50;
const H_MIN: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Vertical,
    Horizontal,
    Dark,
}

/// Old picture collapses to a line, then a dot, then black.
#[derive(Debug)]
pub struct CrtPowerOff {
    old: Canvas,
    v_scale: u32,
    h_scale: u32,
    phase: Phase,
    done: bool,
}

impl Default for CrtPowerOff {
    fn default() -> Self {
        Self {
            old: Canvas::default(),
            v_scale: SCALE_FULL,
            h_scale: SCALE_FULL,
            phase: Phase::Vertical,
            done: false,
        }
    }
}

impl CrtPowerOff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transition for CrtPowerOff {
    fn name(&self) -> &str {
        "CRT Power Off"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16
    }

    fn set_content(&mut self, old: Canvas, _new: Canvas) {
        self.old = old;
    }

    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            match self.phase {
                Phase::Vertical => {
                    self.v_scale = self.v_scale.saturating_sub(SCALE_STEP).max(V_MIN);
                    if self.v_scale <= V_MIN {
                        self.phase = Phase::Horizontal;
                    }
                }
                Phase::Horizontal => {
                    self.h_scale = self.h_scale.saturating_sub(SCALE_STEP).max(H_MIN);
                    if self.h_scale <= H_MIN {
                        self.phase = Phase::Dark;
                    }
                }
                Phase::Dark => self.done = true,
            }
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.done
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        if self.phase == Phase::Dark {
            return c;
        }

        let w = u32::from(viewport.width);
        let h = u32::from(viewport.height);
        let visible_w = (w * self.h_scale / SCALE_FULL).max(1);
        let visible_h = (h * self.v_scale / SCALE_FULL).max(1);
        let start_x = fx::centered(viewport.width, visible_w as usize);
        let start_y = fx::centered(viewport.height, visible_h as usize);
        let bright = CellStyle::fg(Rgb::WHITE).bold();

        for y in 0..visible_h {
            let src_y = (y * SCALE_FULL / self.v_scale) as i32;
            for x in 0..visible_w {
                let src_x = (x * SCALE_FULL / self.h_scale) as i32;
                let ch = fx::frame_cell(&self.old, src_x, src_y).ch;
                c.set_char(start_x + x as i32, start_y + y as i32, ch, bright);
            }
        }
        c
    }
}
