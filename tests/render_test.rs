//! Rendering tests across every built-in renderer and a range of viewports.

use tui_quiz::core::fit;
use tui_quiz::engine::render_guarded;
use tui_quiz::scenes::Registry;
use tui_quiz::term::{encode_full_into, Canvas, CellStyle, Rgb};
use tui_quiz::types::{
    ColorProfile, Event, Input, Question, Viewport, LOADING_FALLBACK, TRANSITION_FALLBACK,
};

const VIEWPORTS: [Viewport; 6] = [
    Viewport::new(80, 24),
    Viewport::new(120, 40),
    Viewport::new(40, 12),
    Viewport::new(12, 5),
    Viewport::new(1, 1),
    Viewport::new(0, 0),
];

fn question() -> Question {
    Question {
        id: 9,
        text: "Which encoding turns every three bytes into four printable characters?".into(),
        answer: "base64".into(),
        hint: "Its name is a power of two.".into(),
    }
}

#[test]
fn test_every_theme_renders_without_falling_back() {
    let registry = Registry::builtin();
    let q = question();
    for ctor in registry.list_themes() {
        let theme = ctor();
        for vp in VIEWPORTS {
            let fitted = Question {
                text: fit(theme.layout_budget(vp), &q.text).text(),
                ..q.clone()
            };
            let frame = render_guarded(theme.name(), vp, LOADING_FALLBACK, || {
                theme.view(vp, &fitted, "base6", Some(&q.hint))
            });
            assert_eq!(frame.viewport(), vp);
            if vp.width >= 40 {
                assert!(
                    !frame.plain_text().contains(LOADING_FALLBACK),
                    "{} fell back at {:?}",
                    theme.name(),
                    vp
                );
            }
        }
    }
}

#[test]
fn test_fitted_question_is_visible_at_default_size() {
    let registry = Registry::builtin();
    let q = question();
    let vp = Viewport::new(80, 24);
    for ctor in registry.list_themes() {
        let theme = ctor();
        let fitted = fit(theme.layout_budget(vp), &q.text);
        let shown = Question {
            text: fitted.text(),
            ..q.clone()
        };
        let text = theme.view(vp, &shown, "", None).plain_text().to_uppercase();
        for line in &fitted.lines {
            let line = line.to_uppercase();
            assert!(text.contains(&line), "{}: missing {:?}", theme.name(), line);
        }
    }
}

#[test]
fn test_every_transition_renders_mid_animation() {
    let registry = Registry::builtin();
    for ctor in registry.list_transitions() {
        for vp in VIEWPORTS {
            let mut transition = ctor();
            let old = Canvas::with_message(vp, "OLD", CellStyle::default());
            let new = Canvas::with_message(vp, "NEW", CellStyle::fg(Rgb::WHITE));
            transition.set_content(old, new);
            transition.init();
            for i in 0..20 {
                transition.update(&Event::Tick);
                if i % 5 == 0 {
                    transition.update(&Event::Input(Input::Char(' ')));
                }
                let frame = render_guarded(transition.name(), vp, TRANSITION_FALLBACK, || {
                    transition.view(vp)
                });
                assert_eq!(frame.viewport(), vp);
                if !vp.is_empty() && vp.width >= 40 {
                    assert!(!frame.plain_text().contains(TRANSITION_FALLBACK));
                }
            }
        }
    }
}

#[test]
fn test_no_color_output_has_no_color_sequences() {
    let mut canvas = Canvas::new(10, 2);
    canvas.set_string(0, 0, "hi", CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)));

    let mut plain = Vec::new();
    encode_full_into(&canvas, ColorProfile::NoColor, &mut plain).unwrap();
    let plain = String::from_utf8(plain).unwrap();
    assert!(!plain.contains("38;"));
    assert!(!plain.contains("48;"));
    assert!(plain.contains("hi"));

    let mut rich = Vec::new();
    encode_full_into(&canvas, ColorProfile::TrueColor, &mut rich).unwrap();
    let rich = String::from_utf8(rich).unwrap();
    assert!(rich.contains("38;2;255;0;0"));
}
