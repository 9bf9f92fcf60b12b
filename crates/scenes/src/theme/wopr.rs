use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, Event, LayoutBudget, Question, Viewport};
use crate::Next;

use super::{remaining, Theme};

const CYAN: Rgb = Rgb::new(0x00, 0xFF, 0xFF);
const MENU_X: i32 = 10;
const GAME_PREFIX: &str = "4. ";

/// Game selection menu where the question is the fourth game. Single line.
#[derive(Debug, Default)]
pub struct WoprTheme {
    ticks: u32,
}

impl WoprTheme {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Theme for WoprTheme {
    fn name(&self) -> &str {
        "WOPR"
    }

    fn description(&self) -> &str {
        "Shall we play a game?"
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        LayoutBudget::single_line(remaining(
            viewport.width,
            MENU_X as usize + GAME_PREFIX.len(),
        ))
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
        let cyan = CellStyle::fg(CYAN);

        let greeting = "GREETINGS PROFESSOR FALKEN";
        c.set_string(fx::centered(viewport.width, greeting.len()), 2, greeting, cyan);

        c.set_string(MENU_X, 5, "GAME SELECTION:", cyan);
        c.set_string(MENU_X, 7, "1. FALKEN'S MAZE", cyan);
        c.set_string(MENU_X, 8, "2. BLACK JACK", cyan);
        c.set_string(MENU_X, 9, "3. GLOBAL THERMONUCLEAR WAR", cyan);

        let max = self.layout_budget(viewport).max_chars_per_line;
        let game = fx::clip(&question.text.to_uppercase(), max);
        c.set_string(MENU_X, 10, &format!("{GAME_PREFIX}{game}"), cyan);

        c.set_string(MENU_X, 14, "ENTER MOVE:", cyan);
        let cursor = if fx::blink(self.ticks, 8) { '_' } else { ' ' };
        c.set_string(MENU_X + 12, 14, &format!("{input}{cursor}"), cyan);

        if let Some(hint) = hint {
            c.set_string(MENU_X, 16, &format!("HINT: {}", hint.to_uppercase()), cyan);
        }
        c
    }
}
