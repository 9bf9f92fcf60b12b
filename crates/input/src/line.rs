//! Single-line answer editor.
//!
//! Storage is a fixed-capacity `ArrayVec`, so typing never allocates and the
//! length limit is enforced by construction.

use arrayvec::ArrayVec;

use crate::types::INPUT_CHAR_LIMIT;

/// The answer being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    chars: ArrayVec<char, INPUT_CHAR_LIMIT>,
}

impl AnswerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a char. Returns false when the line is full or `c` is a control char.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.chars.try_push(c).is_ok()
    }

    pub fn backspace(&mut self) {
        self.chars.pop();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.is_full()
    }

    /// Raw text, used for answer checking.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Text safe to hand to a renderer.
    pub fn display_value(&self) -> String {
        sanitize_for_display(&self.value())
    }
}

/// Strip terminal escape sequences and stray SGR fragments, fold CR/LF/TAB to spaces
/// and drop any other control chars.
///
/// ```
/// use tui_quiz_input::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(sanitize_for_display("a\r\nb"), "a  b");
/// assert_eq!(sanitize_for_display("[1;32mhi"), "hi");
/// ```
pub fn sanitize_for_display(s: &str) -> String {
    let folded: String = s
        .chars()
        .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
        .collect();
    let stripped = strip_ansi_escapes::strip_str(&folded);

    let chars: Vec<char> = stripped.chars().collect();
    let mut out = String::with_capacity(stripped.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '[' => match sgr_fragment_end(&chars, i) {
                Some(end) => i = end,
                None => {
                    out.push('[');
                    i += 1;
                }
            },
            c if c.is_control() => i += 1,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// If `[digits;...m` starts at `start`, the index just past the `m`.
fn sgr_fragment_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while let Some(&c) = chars.get(i) {
        match c {
            '0'..='9' | ';' => i += 1,
            'm' => return Some(i + 1),
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_backspace() {
        let mut input = AnswerInput::new();
        for c in "echo".chars() {
            assert!(input.push(c));
        }
        assert_eq!(input.value(), "echo");
        input.backspace();
        assert_eq!(input.value(), "ech");
        input.clear();
        assert!(input.is_empty());
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut input = AnswerInput::new();
        for _ in 0..INPUT_CHAR_LIMIT {
            assert!(input.push('x'));
        }
        assert!(input.is_full());
        assert!(!input.push('y'));
        assert_eq!(input.len(), INPUT_CHAR_LIMIT);
    }

    #[test]
    fn test_control_chars_rejected() {
        let mut input = AnswerInput::new();
        assert!(!input.push('\x1b'));
        assert!(!input.push('\n'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_for_display("\x1b[1;31mALERT\x1b[0m"), "ALERT");
        assert_eq!(sanitize_for_display("\x1b]0;title\x07ok"), "ok");
        assert_eq!(sanitize_for_display("\x1b]8;;url\x1b\\link"), "link");
        assert_eq!(sanitize_for_display("a\x1bcb"), "ab");
    }

    #[test]
    fn test_display_value_drops_typed_sgr_fragment() {
        let mut input = AnswerInput::new();
        for c in "[31mroot[0m".chars() {
            input.push(c);
        }
        assert_eq!(input.value(), "[31mroot[0m");
        assert_eq!(input.display_value(), "root");
    }

    #[test]
    fn test_sanitize_keeps_ordinary_brackets() {
        assert_eq!(sanitize_for_display("[abc]"), "[abc]");
        assert_eq!(sanitize_for_display("arr[0]"), "arr[0]");
        assert_eq!(sanitize_for_display("[0m"), "");
    }

    #[test]
    fn test_sanitize_folds_line_breaks() {
        assert_eq!(sanitize_for_display("one\ntwo\rthree"), "one two three");
        assert_eq!(sanitize_for_display("bell\x07"), "bell");
    }
}
