//! Fixed screens owned by the engine: boot intro, success, and the demo badge.

use crate::core::fit;
use crate::scenes::fx;
use crate::term::{BoxGlyphs, Canvas, CellStyle, Rgb};
use crate::types::{Config, LayoutBudget, Viewport};

pub const INTRO_TEXT: &str = "SYSTEM BOOT SEQUENCE INITIATED...\n\n[PRESS ENTER TO HACK THE PLANET]";
pub const SUCCESS_TITLE: &str = "ACCESS GRANTED";
pub const DEMO_BADGE: &str = " DEMO MODE ";

const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
const BADGE_RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
const CURSOR_PERIOD: u32 = 15;
/// Border plus padding on each side of the success box.
const SUCCESS_INSET: usize = 6;

pub fn intro(viewport: Viewport, tick: u32) -> Canvas {
    let mut c = Canvas::for_viewport(viewport);
    let style = CellStyle::fg(GREEN).bold();
    let lines: Vec<&str> = INTRO_TEXT.lines().collect();
    let top = fx::centered(viewport.height, lines.len());
    let center = i32::from(viewport.width) / 2;
    fx::draw_lines_centered(
        &mut c,
        center,
        top,
        INTRO_TEXT,
        usize::from(viewport.width),
        style,
    );

    if fx::blink(tick, CURSOR_PERIOD) {
        let first = lines.first().copied().unwrap_or_default();
        let x = center - fx::text_width(first) / 2 + fx::text_width(first);
        c.set_char(x, top, '_', style);
    }
    c
}

pub fn success(viewport: Viewport, config: &Config) -> Canvas {
    let mut c = Canvas::for_viewport(viewport);
    let border = CellStyle::fg(GREEN);
    let w = i32::from(viewport.width);
    let h = i32::from(viewport.height);
    c.draw_box_with(0, 0, w, h, BoxGlyphs::DOUBLE, border);

    let inner = usize::from(viewport.width).saturating_sub(SUCCESS_INSET);
    let wrap = |text: &str| fit(LayoutBudget::multi_line(inner, 3), text).text();
    let message = wrap(&config.final_message);
    let hint = wrap(&config.final_hint);
    let body = format!("{SUCCESS_TITLE}\n\n{message}\n\n{hint}");

    let rows = body.lines().count();
    let top = fx::centered(viewport.height, rows);
    fx::draw_lines_centered(&mut c, w / 2, top, &body, inner, CellStyle::fg(GREEN).bold());
    c
}

/// Stamp the demo badge on the bottom-left corner.
pub fn demo_overlay(canvas: &mut Canvas) {
    let y = i32::from(canvas.height()) - 1;
    canvas.set_string(0, y, DEMO_BADGE, CellStyle::new(Rgb::WHITE, BADGE_RED).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Question;

    fn config() -> Config {
        Config {
            questions: vec![Question {
                id: 1,
                text: "q".into(),
                answer: "a".into(),
                hint: String::new(),
            }],
            final_message: "The flag is yours.".into(),
            final_hint: "Look behind the curtain.".into(),
        }
    }

    #[test]
    fn test_intro_shows_boot_text() {
        let text = intro(Viewport::new(80, 24), 0).plain_text();
        assert!(text.contains("SYSTEM BOOT SEQUENCE INITIATED..."));
        assert!(text.contains("[PRESS ENTER TO HACK THE PLANET]"));
    }

    #[test]
    fn test_success_shows_final_messages() {
        let frame = success(Viewport::new(80, 24), &config());
        let text = frame.plain_text();
        assert!(text.contains(SUCCESS_TITLE));
        assert!(text.contains("The flag is yours."));
        assert!(text.contains("Look behind the curtain."));
        assert_eq!(frame.get(0, 0).map(|c| c.ch), Some('╔'));
    }

    #[test]
    fn test_screens_survive_tiny_viewports() {
        for vp in [Viewport::new(0, 0), Viewport::new(1, 1), Viewport::new(7, 2)] {
            let _ = intro(vp, 3);
            let _ = success(vp, &config());
        }
    }

    #[test]
    fn test_demo_badge_on_last_row() {
        let mut c = Canvas::new(30, 5);
        demo_overlay(&mut c);
        assert!(c.row_text(4).starts_with(DEMO_BADGE));
    }
}
