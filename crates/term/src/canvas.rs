//! Canvas and style types for terminal rendering.
//!
//! A [`Canvas`] is a `width x height` grid of styled character cells. Every write
//! takes signed coordinates and is silently dropped when it falls outside the grid,
//! so renderers can place text relative to computed anchors without bounds checks.

use std::fmt::Write as _;

use crossterm::style::{Attribute, ContentStyle};
use unicode_width::UnicodeWidthChar;

use crate::color::to_color;
use crate::types::{ColorProfile, Viewport};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional). Falls back to black on bad input.
    pub fn hex(s: &str) -> Self {
        let s = s.trim_start_matches('#');
        let channel = |i: usize| {
            s.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        Self::new(channel(0), channel(2), channel(4))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
            italic: false,
        }
    }
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
            italic: false,
        }
    }

    /// Foreground on black.
    pub const fn fg(fg: Rgb) -> Self {
        Self::new(fg, Rgb::BLACK)
    }

    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }

    /// crossterm style for this cell under the given color profile.
    pub fn content_style(&self, profile: ColorProfile) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = to_color(self.fg, profile);
        style.background_color = to_color(self.bg, profile);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.dim {
            style.attributes.set(Attribute::Dim);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        style
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Drawn in place of any char that does not occupy exactly one terminal column.
pub const WIDE_PLACEHOLDER: char = '?';

/// `ch` if the terminal advances exactly one column for it, else [`WIDE_PLACEHOLDER`].
///
/// One cell is one column, so wide glyphs (CJK, emoji) and zero-width marks
/// would shift the rest of the row.
pub fn single_column(ch: char) -> char {
    match ch.width() {
        Some(1) => ch,
        _ => WIDE_PLACEHOLDER,
    }
}

/// Glyph set for [`Canvas::draw_box_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxGlyphs {
    pub const SINGLE: BoxGlyphs = BoxGlyphs::new(['┌', '┐', '└', '┘', '─', '│']);
    pub const DOUBLE: BoxGlyphs = BoxGlyphs::new(['╔', '╗', '╚', '╝', '═', '║']);
    pub const ROUNDED: BoxGlyphs = BoxGlyphs::new(['╭', '╮', '╰', '╯', '─', '│']);
    pub const HEAVY: BoxGlyphs = BoxGlyphs::new(['┏', '┓', '┗', '┛', '━', '┃']);
    pub const ASCII: BoxGlyphs = BoxGlyphs::new(['+', '+', '+', '+', '-', '|']);

    const fn new(g: [char; 6]) -> Self {
        Self {
            top_left: g[0],
            top_right: g[1],
            bottom_left: g[2],
            bottom_right: g[3],
            horizontal: g[4],
            vertical: g[5],
        }
    }
}

/// 2D grid of styled character cells. The default canvas is empty (0x0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.width, viewport.height)
    }

    /// A viewport-sized canvas with `message` centered on it.
    pub fn with_message(viewport: Viewport, message: &str, style: CellStyle) -> Self {
        let mut canvas = Self::for_viewport(viewport);
        let len = message.chars().count() as i32;
        let x = (i32::from(viewport.width) - len) / 2;
        let y = i32::from(viewport.height) / 2;
        canvas.set_string(x.max(0), y, message, style);
        canvas
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell {
                ch: single_column(cell.ch),
                ..cell
            };
        }
    }

    /// Reset every cell to a default-styled space.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Reset every cell to a space drawn in `style` (useful for backgrounds).
    pub fn clear_with(&mut self, style: CellStyle) {
        self.cells.fill(style.into_cell(' '));
    }

    pub fn set_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `text` left to right from `(x, y)`; each char is bounds-checked.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        if y < 0 || y >= i32::from(self.height) {
            return;
        }
        let mut cx = x;
        for ch in text.chars() {
            if cx >= i32::from(self.width) {
                break;
            }
            self.set_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                self.set_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Single-line box outline.
    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        self.draw_box_with(x, y, w, h, BoxGlyphs::SINGLE, style);
    }

    pub fn draw_box_with(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        glyphs: BoxGlyphs,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }

        for dx in 1..w - 1 {
            self.set_char(x + dx, y, glyphs.horizontal, style);
            self.set_char(x + dx, y + h - 1, glyphs.horizontal, style);
        }
        for dy in 1..h - 1 {
            self.set_char(x, y + dy, glyphs.vertical, style);
            self.set_char(x + w - 1, y + dy, glyphs.vertical, style);
        }

        self.set_char(x, y, glyphs.top_left, style);
        self.set_char(x + w - 1, y, glyphs.top_right, style);
        self.set_char(x, y + h - 1, glyphs.bottom_left, style);
        self.set_char(x + w - 1, y + h - 1, glyphs.bottom_right, style);
    }

    /// Copy `src` onto this canvas with its top-left corner at `(x, y)`.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..i32::from(src.height) {
            for sx in 0..i32::from(src.width) {
                if let Some(cell) = src.get(sx, sy) {
                    self.set(x + sx, y + sy, cell);
                }
            }
        }
    }

    /// Characters of row `y` without styling.
    pub fn row_text(&self, y: i32) -> String {
        (0..i32::from(self.width))
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// All rows without styling, newline-joined.
    pub fn plain_text(&self) -> String {
        (0..i32::from(self.height))
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render with full 24-bit color.
    pub fn render(&self) -> String {
        self.render_with(ColorProfile::TrueColor)
    }

    /// Render row-major, newline-joined, each cell styled independently.
    pub fn render_with(&self, profile: ColorProfile) -> String {
        let mut out = String::with_capacity(self.cells.len() * 24);
        for y in 0..i32::from(self.height) {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..i32::from(self.width) {
                let cell = self.get(x, y).unwrap_or_default();
                let _ = write!(out, "{}", cell.style.content_style(profile).apply(cell.ch));
            }
        }
        out
    }
}
