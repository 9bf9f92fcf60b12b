//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! The first frame (and any frame after a size change or [`TerminalRenderer::invalidate`])
//! is a full redraw; later frames only rewrite runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, CellStyle};
use crate::color::to_color;
use crate::types::ColorProfile;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    profile: ColorProfile,
    last: Option<Canvas>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(profile: ColorProfile) -> Self {
        Self {
            stdout: io::stdout(),
            profile,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, frame: Canvas) -> Result<()> {
        self.buf.clear();
        match self.last.as_ref() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(prev, &frame, self.profile, &mut self.buf)?;
            }
            _ => encode_full_into(&frame, self.profile, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(canvas: &Canvas, profile: ColorProfile, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let cell = canvas.get(i32::from(x), i32::from(y)).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, profile)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < canvas.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &Canvas,
    next: &Canvas,
    profile: ColorProfile,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next
                .get(i32::from(x + dx), i32::from(y))
                .unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, profile)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

// SGR 0 clears colors too, so reset before setting them.
fn apply_style_into(out: &mut Vec<u8>, style: CellStyle, profile: ColorProfile) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if let Some(fg) = to_color(style.fg, profile) {
        out.queue(SetForegroundColor(fg))?;
    }
    if let Some(bg) = to_color(style.bg, profile) {
        out.queue(SetBackgroundColor(bg))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        out.queue(SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();
    let same = |x: u16, y: u16| {
        let (x, y) = (i32::from(x), i32::from(y));
        prev.get(x, y) == next.get(x, y)
    };

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if same(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && !same(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
