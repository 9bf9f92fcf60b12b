use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, LayoutBudget, Question, Viewport};

use super::{remaining, Theme};

const GRAY: Rgb = Rgb::new(0x88, 0x88, 0x88);
const DARK_GRAY: Rgb = Rgb::new(0x55, 0x55, 0x55);

/// Plain root prompt. ASCII only, works on any terminal.
#[derive(Debug, Default)]
pub struct RootShellTheme;

impl RootShellTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Theme for RootShellTheme {
    fn name(&self) -> &str {
        "Root Shell"
    }

    fn description(&self) -> &str {
        "Clean, minimal root shell access"
    }

    fn is_compatible(&self, _caps: &Capabilities) -> bool {
        true
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        LayoutBudget::multi_line(
            remaining(viewport.width, 8),
            remaining(viewport.height, 11),
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
        let budget = self.layout_budget(viewport);
        let h = i32::from(viewport.height);
        let gray = CellStyle::fg(GRAY);

        c.set_string(
            2,
            2,
            &format!("root@system:~/challenges/0x{:02x}# ./view_question", question.id),
            gray,
        );
        c.set_string(2, 3, &"-".repeat(remaining(viewport.width, 4)), gray);

        fx::draw_lines(
            &mut c,
            4,
            5,
            &question.text,
            budget.max_chars_per_line,
            CellStyle::fg(Rgb::WHITE).bold(),
        );

        if let Some(hint) = hint {
            c.set_string(4, h - 5, &format!("// {hint}"), CellStyle::fg(DARK_GRAY).italic());
        }
        c.set_string(2, h - 3, &format!("root@system:~/input# {input}"), CellStyle::default());
        c
    }
}
