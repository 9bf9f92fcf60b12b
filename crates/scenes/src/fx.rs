//! Small numeric and styling helpers shared by the renderers.

use crate::term::{Canvas, Cell, CellStyle, Rgb};

/// True for the first half of every `period` ticks.
pub fn blink(tick: u32, period: u32) -> bool {
    let period = period.max(1);
    (tick / period) % 2 == 0
}

/// Triangle wave in `0.0..=1.0` with a full cycle every `period` ticks.
pub fn pulse(tick: u32, period: u32) -> f32 {
    let period = period.max(2);
    let half = period as f32 / 2.0;
    let phase = (tick % period) as f32;
    if phase <= half {
        phase / half
    } else {
        (period as f32 - phase) / half
    }
}

/// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Fade `color` towards black; `1.0` is full brightness.
pub fn fade(color: Rgb, brightness: f32) -> Rgb {
    lerp(Rgb::BLACK, color, brightness)
}

/// Left/top offset that centers `inner` cells inside `outer` cells.
pub fn centered(outer: u16, inner: usize) -> i32 {
    (i32::from(outer) - inner as i32) / 2
}

/// Char count of `s` as a signed width.
pub fn text_width(s: &str) -> i32 {
    s.chars().count() as i32
}

/// Cheap deterministic hash used for per-cell "randomness" in pure `view` calls.
pub fn noise(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = x
        .wrapping_mul(0x9E37_79B1)
        .wrapping_add(y.wrapping_mul(0x85EB_CA77))
        .wrapping_add(seed.wrapping_mul(0xC2B2_AE3D));
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297A_2D39);
    h ^= h >> 15;
    h
}

/// Pick a char from `set` using [`noise`].
pub fn noise_char(set: &[char], x: u32, y: u32, seed: u32) -> char {
    if set.is_empty() {
        return ' ';
    }
    set[noise(x, y, seed) as usize % set.len()]
}

/// Cell at `(x, y)` of a captured frame, blank when out of range.
pub fn frame_cell(frame: &Canvas, x: i32, y: i32) -> Cell {
    frame.get(x, y).unwrap_or_default()
}

/// Draw each `\n`-separated line of `text` starting at `(x, y)`, at most `max_chars`
/// chars per line. Returns the number of rows used.
pub fn draw_lines(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    max_chars: usize,
    style: CellStyle,
) -> i32 {
    let mut rows = 0;
    for line in text.split('\n') {
        let clipped: String = line.chars().take(max_chars).collect();
        canvas.set_string(x, y + rows, &clipped, style);
        rows += 1;
    }
    rows
}

/// Like [`draw_lines`] but each line is centered on column `center_x`.
pub fn draw_lines_centered(
    canvas: &mut Canvas,
    center_x: i32,
    y: i32,
    text: &str,
    max_chars: usize,
    style: CellStyle,
) -> i32 {
    let mut rows = 0;
    for line in text.split('\n') {
        let clipped: String = line.chars().take(max_chars).collect();
        canvas.set_string(center_x - text_width(&clipped) / 2, y + rows, &clipped, style);
        rows += 1;
    }
    rows
}

/// `s` shortened to `max` chars.
pub fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
