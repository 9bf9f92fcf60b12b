//! Retro console family: one boxed layout, different palettes and borders.

use crate::fx;
use crate::term::{BoxGlyphs, Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, ColorProfile, LayoutBudget, Question, Viewport};

use super::{remaining, Theme};

/// Palette and framing for a [`ConsoleTheme`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub bg: Rgb,
    pub fg: Rgb,
    pub border: Rgb,
    pub title: Rgb,
    pub glyphs: BoxGlyphs,
    pub bold: bool,
    /// Squeeze the question onto one line.
    pub single_line: bool,
}

#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    config: ConsoleConfig,
}

impl ConsoleTheme {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    fn box_width(viewport: Viewport) -> usize {
        remaining(viewport.width, 4).max(20)
    }
}

impl Theme for ConsoleTheme {
    fn name(&self) -> &str {
        self.config.name
    }

    fn description(&self) -> &str {
        self.config.description
    }

    fn is_compatible(&self, caps: &Capabilities) -> bool {
        caps.color_profile >= ColorProfile::Ansi16 && caps.has_unicode
    }

    fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
        let inner = Self::box_width(viewport) - 4;
        if self.config.single_line {
            LayoutBudget::single_line(inner)
        } else {
            LayoutBudget::multi_line(inner, remaining(viewport.height, 12))
        }
    }

    fn init(&mut self) -> crate::Next {
        crate::Next::Idle
    }

    fn view(
        &self,
        viewport: Viewport,
        question: &Question,
        input: &str,
        hint: Option<&str>,
    ) -> Canvas {
        let cfg = &self.config;
        let mut c = Canvas::for_viewport(viewport);
        let base = CellStyle::new(cfg.fg, cfg.bg);
        c.clear_with(base);

        let box_w = Self::box_width(viewport) as i32;
        let box_h = i32::from(viewport.height) - 2;
        let box_x = fx::centered(viewport.width, box_w as usize);
        c.draw_box_with(box_x, 1, box_w, box_h, cfg.glyphs, CellStyle::new(cfg.border, cfg.bg));

        let inner = (box_w - 4).max(0) as usize;
        let center = box_x + box_w / 2;
        let text_style = if cfg.bold { base.bold() } else { base };
        let mut y = 3;

        let header = format!(
            "*** {} MODE - LEVEL {} ***",
            cfg.name.to_uppercase(),
            question.id
        );
        fx::draw_lines_centered(
            &mut c,
            center,
            y,
            &header,
            inner,
            CellStyle::new(cfg.title, cfg.bg).bold(),
        );
        y += 2;

        y += fx::draw_lines_centered(&mut c, center, y, &question.text, inner, text_style);
        y += 1;

        fx::draw_lines_centered(&mut c, center, y, &format!("INPUT: {input}"), inner, text_style);
        if let Some(hint) = hint {
            fx::draw_lines_centered(
                &mut c,
                center,
                y + 2,
                &format!("(HINT: {hint})"),
                inner,
                text_style,
            );
        }
        c
    }
}

pub fn nes() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "NES",
        description: "8-bit Classic",
        bg: Rgb::BLACK,
        fg: Rgb::WHITE,
        border: Rgb::hex("#FF0000"),
        title: Rgb::hex("#FF0000"),
        glyphs: BoxGlyphs::DOUBLE,
        bold: false,
        single_line: false,
    })
}

pub fn gameboy() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "Gameboy",
        description: "Dot Matrix Green",
        bg: Rgb::hex("#8BAC0F"),
        fg: Rgb::hex("#0F380F"),
        border: Rgb::hex("#306230"),
        title: Rgb::hex("#0F380F"),
        glyphs: BoxGlyphs::ROUNDED,
        bold: false,
        single_line: false,
    })
}

pub fn c64() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "C64",
        description: "Commodore 64 Blue",
        bg: Rgb::hex("#40318D"),
        fg: Rgb::hex("#7B6FBB"),
        border: Rgb::hex("#7B6FBB"),
        title: Rgb::WHITE,
        glyphs: BoxGlyphs::HEAVY,
        bold: true,
        single_line: false,
    })
}

pub fn amiga() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "Amiga",
        description: "Workbench Style",
        bg: Rgb::hex("#0055AA"),
        fg: Rgb::WHITE,
        border: Rgb::hex("#FF8800"),
        title: Rgb::WHITE,
        glyphs: BoxGlyphs::SINGLE,
        bold: false,
        single_line: false,
    })
}

pub fn atari() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "Atari",
        description: "2600 Style",
        bg: Rgb::BLACK,
        fg: Rgb::hex("#D4A017"),
        border: Rgb::hex("#8B4513"),
        title: Rgb::hex("#D4A017"),
        glyphs: BoxGlyphs::DOUBLE,
        bold: false,
        single_line: false,
    })
}

pub fn targeting_computer() -> ConsoleTheme {
    ConsoleTheme::new(ConsoleConfig {
        name: "Targeting Computer",
        description: "Stay on target",
        bg: Rgb::BLACK,
        fg: Rgb::hex("#FF0000"),
        border: Rgb::hex("#FF0000"),
        title: Rgb::hex("#FF0000"),
        glyphs: BoxGlyphs::SINGLE,
        bold: false,
        single_line: true,
    })
}
