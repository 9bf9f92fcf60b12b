//! Text fitting - wrap or truncate question text into a theme's layout budget.
//!
//! Pure and deterministic: the same budget and text always produce the same
//! result, so theme selection can fit every candidate without side effects.
//!
//! - **Single-line** budgets truncate to `max_chars_per_line` chars, replacing the
//!   last visible char with [`ELLIPSIS`] when text is cut.
//! - **Multi-line** budgets greedily word-wrap; words longer than a line are
//!   hard-split. When more than `max_lines` lines would be needed, the last kept
//!   line is forced to end in [`ELLIPSIS`].
//!
//! Budgets below 1 (chars or lines) are clamped to 1.

use crate::types::{LayoutBudget, ELLIPSIS};

/// Result of fitting text into a [`LayoutBudget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitResult {
    /// Output lines, never more than `layout.max_lines`.
    pub lines: Vec<String>,
    /// Chars shown across all lines (ellipsis included, line breaks excluded).
    pub visible_chars: usize,
    /// True when some of the input could not be shown.
    pub truncated: bool,
    /// The budget actually applied (after clamping).
    pub layout: LayoutBudget,
}

impl FitResult {
    /// Lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Fit `text` into `budget`.
///
/// # Examples
///
/// ```
/// use tui_quiz_core::fit;
/// use tui_quiz_types::LayoutBudget;
///
/// let r = fit(LayoutBudget::single_line(5), "abcdefgh");
/// assert_eq!(r.text(), "abcd…");
/// assert!(r.truncated);
///
/// let r = fit(LayoutBudget::multi_line(10, 2), "the quick brown fox");
/// assert_eq!(r.lines, vec!["the quick", "brown fox"]);
/// assert!(!r.truncated);
/// ```
pub fn fit(budget: LayoutBudget, text: &str) -> FitResult {
    let max_chars = budget.max_chars_per_line.max(1);
    if budget.multiline {
        let layout = LayoutBudget::multi_line(max_chars, budget.max_lines.max(1));
        fit_multi_line(layout, text)
    } else {
        fit_single_line(LayoutBudget::single_line(max_chars), text)
    }
}

fn fit_single_line(layout: LayoutBudget, text: &str) -> FitResult {
    let max = layout.max_chars_per_line;
    let flat: String = text
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();
    let count = flat.chars().count();

    if count <= max {
        return FitResult {
            lines: vec![flat],
            visible_chars: count,
            truncated: false,
            layout,
        };
    }

    let line = if max <= 1 {
        ELLIPSIS.to_string()
    } else {
        flat.chars()
            .take(max - 1)
            .chain(std::iter::once(ELLIPSIS))
            .collect()
    };

    FitResult {
        visible_chars: line.chars().count(),
        lines: vec![line],
        truncated: true,
        layout,
    }
}

fn fit_multi_line(layout: LayoutBudget, text: &str) -> FitResult {
    let max = layout.max_chars_per_line;
    let mut lines = wrap_words(text, max);
    let mut truncated = false;

    if lines.len() > layout.max_lines {
        lines.truncate(layout.max_lines);
        truncated = true;
        if let Some(last) = lines.last_mut() {
            force_ellipsis(last, max);
        }
    }

    let visible_chars = lines.iter().map(|l| l.chars().count()).sum();
    FitResult {
        lines,
        visible_chars,
        truncated,
        layout,
    }
}

/// Greedy word wrap. Always returns at least one (possibly empty) line.
fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= max {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut rest = chars.as_slice();
        while rest.len() > max {
            lines.push(rest[..max].iter().collect());
            rest = &rest[max..];
        }
        current = rest.iter().collect();
        current_len = rest.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Make `line` end with an ellipsis without exceeding `max` chars.
fn force_ellipsis(line: &mut String, max: usize) {
    let len = line.chars().count();
    if len < max {
        line.push(ELLIPSIS);
    } else {
        *line = line
            .chars()
            .take(max.saturating_sub(1))
            .chain(std::iter::once(ELLIPSIS))
            .collect();
    }
}
