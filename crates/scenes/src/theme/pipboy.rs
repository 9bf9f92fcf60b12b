use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, LayoutBudget, Question, Viewport};

use super::{remaining, Theme};

const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
const BG: Rgb = Rgb::new(0x00, 0x11, 0x00);
const SCANLINE: Rgb = Rgb::new(0x00, 0x22, 0x00);
const TAB_BG: Rgb = Rgb::new(0x00, 0x33, 0x00);
const CONTENT_X: i32 = 20;

const VAULT_BOY: [&str; 4] = [" (^_^)", "/|  |\\", " |__| ", "  LL  "];

/// Wrist computer with scanlines and a mascot.
#[derive(Debug, Default)]
pub struct PipBoyTheme;

impl PipBoyTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Theme for PipBoyTheme {
    fn name(&self) -> &str {
        "Pip-Boy 3000"
    }

    fn description(&self) -> &str {
        "Vault-Tec Approved"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi256 && caps.has_unicode
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        LayoutBudget::multi_line(
            remaining(viewport.width, CONTENT_X as usize + 4),
            remaining(viewport.height, 16),
        )
    }

    fn view(
        &self,
        viewport: Viewport,
        question: &Question,
        input: &str,
        hint: Option<&str>,
    ) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        let w = i32::from(viewport.width);
        let h = i32::from(viewport.height);
        let green = CellStyle::new(GREEN, BG);

        c.clear_with(CellStyle::new(GREEN, BG));
        for y in (0..h).step_by(2) {
            c.fill(0, y, w, 1, ' ', CellStyle::new(GREEN, SCANLINE));
        }

        c.draw_box(2, 2, w - 4, h - 4, green);
        c.set_string(4, 2, " STATS   ITEMS   DATA ", CellStyle::new(GREEN, TAB_BG));
        c.set_string(w - 14, 2, " HP 100/100 ", green);

        for (i, row) in VAULT_BOY.iter().enumerate() {
            c.set_string(5, 5 + i as i32, row, green);
        }

        c.set_string(CONTENT_X, 6, "QUEST: Answer the Question", green.bold());
        let max = self.layout_budget(viewport).max_chars_per_line;
        fx::draw_lines(&mut c, CONTENT_X, 8, &question.text, max, green);

        c.set_string(CONTENT_X, h - 7, &format!("> {input}_"), green);
        if let Some(hint) = hint {
            c.set_string(CONTENT_X, h - 5, &format!("HINT: {hint}"), green.dim());
        }

        c.set_string(4, h - 3, " [ENTER] SELECT   [F1] RETUNE ", green);
        c
    }
}
