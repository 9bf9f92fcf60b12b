//! The render boundary.
//!
//! Every call into a theme's or transition's `view` goes through [`render_guarded`].
//! A panicking renderer is logged and replaced with a one-line fallback frame; the
//! session state is untouched, so the next frame simply tries again.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::Viewport;

/// Style of fallback frames.
pub const FALLBACK_STYLE: CellStyle = CellStyle::fg(Rgb::new(0x00, 0xFF, 0x00));

/// Run `render` and return its frame, or a centered `fallback` message if it panics.
///
/// Frames whose size differs from `viewport` are copied onto a canvas of the right
/// size, so callers always get exactly `viewport` back.
pub fn render_guarded<F>(renderer: &str, viewport: Viewport, fallback: &str, render: F) -> Canvas
where
    F: FnOnce() -> Canvas,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(frame) if frame.viewport() == viewport => frame,
        Ok(frame) => {
            let mut normalized = Canvas::for_viewport(viewport);
            normalized.blit(&frame, 0, 0);
            normalized
        }
        Err(payload) => {
            warn!(
                renderer,
                panic = %panic_message(payload.as_ref()),
                "renderer panicked, showing fallback"
            );
            Canvas::with_message(viewport, fallback, FALLBACK_STYLE)
        }
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LOADING_FALLBACK;

    const VP: Viewport = Viewport::new(40, 10);

    #[test]
    fn test_panic_is_contained() {
        let frame = render_guarded("broken", VP, LOADING_FALLBACK, || {
            panic!("index out of bounds");
        });
        assert_eq!(frame.viewport(), VP);
        assert!(frame.plain_text().contains(LOADING_FALLBACK));
    }

    #[test]
    fn test_string_payload_is_contained() {
        let frame = render_guarded("broken", VP, "fallback", || {
            let n = 3;
            panic!("bad width {n}");
        });
        assert_eq!(frame.plain_text().trim(), "fallback");
    }

    #[test]
    fn test_good_frame_passes_through() {
        let frame = render_guarded("ok", VP, "fallback", || {
            let mut c = Canvas::for_viewport(VP);
            c.set_string(0, 0, "hello", CellStyle::default());
            c
        });
        assert!(frame.row_text(0).starts_with("hello"));
    }

    #[test]
    fn test_wrong_size_frame_is_normalized() {
        let frame = render_guarded("small", VP, "fallback", || {
            let mut c = Canvas::new(5, 1);
            c.set_string(0, 0, "tiny!", CellStyle::default());
            c
        });
        assert_eq!(frame.viewport(), VP);
        assert!(frame.row_text(0).starts_with("tiny!"));

        let frame = render_guarded("big", VP, "fallback", || Canvas::new(200, 100));
        assert_eq!(frame.viewport(), VP);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "<non-string panic>");
    }
}
