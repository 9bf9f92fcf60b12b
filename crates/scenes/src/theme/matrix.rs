use crate::fx;
use crate::term::{BoxGlyphs, Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, Event, LayoutBudget, Question, Viewport};
use crate::Next;

use super::{remaining, Theme};

const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
const DARK_GREEN: Rgb = Rgb::new(0x00, 0x55, 0x00);
const TRAIL: i32 = 8;
const MAX_BOX_WIDTH: usize = 50;

/// Half-width katakana plus digits, the classic rain alphabet.
const RAIN: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ',
    'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', '0', '1', '2', '3', '4', '5',
    '7', '8', '9',
];

/// Digital rain behind a pulsing double-bordered box.
#[derive(Debug, Default)]
pub struct MatrixTheme {
    ticks: u32,
}

impl MatrixTheme {
    pub fn new() -> Self {
        Self::default()
    }

    fn box_width(viewport: Viewport) -> usize {
        MAX_BOX_WIDTH.min(remaining(viewport.width, 4))
    }

    fn draw_rain(&self, c: &mut Canvas, viewport: Viewport) {
        let h = i32::from(viewport.height);
        let period = h + TRAIL;
        for x in 0..u32::from(viewport.width) {
            // Roughly one column in three carries a drop.
            if fx::noise(x, 0, 3) % 3 != 0 {
                continue;
            }
            let speed = 1 + fx::noise(x, 1, 5) % 3;
            let offset = fx::noise(x, 2, 9) % period.max(1) as u32;
            let head = ((self.ticks * speed / 3 + offset) % period.max(1) as u32) as i32;

            for k in 0..TRAIL {
                let y = head - k;
                let ch = fx::noise_char(RAIN, x, y as u32, self.ticks / 6);
                let style = if k == 0 {
                    CellStyle::fg(Rgb::WHITE).bold()
                } else {
                    CellStyle::fg(fx::fade(GREEN, 1.0 - k as f32 / TRAIL as f32))
                };
                c.set_char(x as i32, y, ch, style);
            }
        }
    }
}

impl Theme for MatrixTheme {
    fn name(&self) -> &str {
        "The Matrix"
    }

    fn description(&self) -> &str {
        "Digital Rain"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi256 && caps.has_unicode
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        LayoutBudget::multi_line(
            Self::box_width(viewport).saturating_sub(4),
            remaining(viewport.height, 12),
        )
    }

    fn update(&mut self, event: &Event) -> Next {
        if event.is_tick() {
            self.ticks = self.ticks.wrapping_add(1);
            return Next::Tick;
        }
        Next::Idle
    }

    fn view(
        &self,
        viewport: Viewport,
        question: &Question,
        input: &str,
        hint: Option<&str>,
    ) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        self.draw_rain(&mut c, viewport);

        let max = self.layout_budget(viewport).max_chars_per_line;
        let lines = question.text.split('\n').count() as i32;
        let box_w = Self::box_width(viewport) as i32;
        let box_h = lines + 8 + if hint.is_some() { 2 } else { 0 };
        let box_x = fx::centered(viewport.width, box_w as usize);
        let box_y = (i32::from(viewport.height) - box_h) / 2;

        let border = if self.ticks % 6 < 3 { DARK_GREEN } else { GREEN };
        let text = CellStyle::fg(GREEN);
        c.fill(box_x, box_y, box_w, box_h, ' ', CellStyle::default());
        c.draw_box_with(box_x, box_y, box_w, box_h, BoxGlyphs::DOUBLE, CellStyle::fg(border));

        let center = box_x + box_w / 2;
        let mut y = box_y + 2;
        fx::draw_lines_centered(&mut c, center, y, "WAKE UP NEO...", max, text.bold());
        y += 2;
        y += fx::draw_lines_centered(&mut c, center, y, &question.text, max, text);
        y += 1;
        fx::draw_lines_centered(&mut c, center, y, &format!("> {input}"), max, text);
        if let Some(hint) = hint {
            fx::draw_lines_centered(&mut c, center, y + 2, &format!("HINT: {hint}"), max, text);
        }
        c
    }
}
