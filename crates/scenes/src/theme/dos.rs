use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, Event, LayoutBudget, Question, Viewport};
use crate::Next;

use super::{remaining, Theme};

const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xAA);
const GRAY: Rgb = Rgb::new(0xAA, 0xAA, 0xAA);

/// Cursor blink half-period (~500ms).
const BLINK_TICKS: u32 = 15;

/// Blue IDE screen with a blinking prompt.
#[derive(Debug, Default)]
pub struct DosTheme {
    ticks: u32,
}

impl DosTheme {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Theme for DosTheme {
    fn name(&self) -> &str {
        "MS-DOS"
    }

    fn description(&self) -> &str {
        "Blue background, gray text"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        LayoutBudget::multi_line(remaining(viewport.width, 4), remaining(viewport.height, 12))
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
        let base = CellStyle::new(GRAY, BLUE);
        let bar = CellStyle::new(Rgb::BLACK, GRAY);
        let w = i32::from(viewport.width);
        let h = i32::from(viewport.height);
        c.clear_with(base);

        let title = " C:\\WINDOWS\\SYSTEM32\\HACK.EXE ";
        c.fill(0, 0, w, 1, ' ', CellStyle::new(BLUE, Rgb::WHITE));
        c.set_string(
            fx::centered(viewport.width, title.len()),
            0,
            title,
            CellStyle::new(BLUE, Rgb::WHITE),
        );

        c.fill(0, 1, w, 1, ' ', bar);
        c.set_string(
            0,
            1,
            " File  Edit  Search  Run  Compile  Debug  Options  Help ",
            bar,
        );

        c.set_string(2, 3, &format!("Question ID: {:04X}", question.id), base);
        let max = self.layout_budget(viewport).max_chars_per_line;
        fx::draw_lines(&mut c, 2, 5, &question.text, max, base);

        let cursor = if fx::blink(self.ticks, BLINK_TICKS) { '_' } else { ' ' };
        c.set_string(2, h - 6, &format!("C:\\> {input}{cursor}"), base);

        if let Some(hint) = hint {
            c.set_string(2, h - 4, "Bad command or filename.", base);
            c.set_string(2, h - 3, &format!("Hint: {hint}"), base);
        }

        let footer = " F1=Help  Alt+X=Exit ";
        c.fill(0, h - 1, w, 1, ' ', bar);
        c.set_string(fx::centered(viewport.width, footer.len()), h - 1, footer, bar);
        c
    }
}
