//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data with no terminal or I/O dependencies, so it can
//! be used from the pure logic crates, the renderers and the event loop alike.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Animation tick interval (~30 FPS) |
//! | `DEMO_TICK_BUDGET` | 150 | Ticks before demo mode forces a transition (~5s) |
//!
//! # Theme Scoring
//!
//! Theme selection scores each candidate as
//! `visible_chars + MULTILINE_BONUS (if multi-line) + UNTRUNCATED_BONUS (if not truncated)`.
//! The untruncated bonus is large enough that a theme showing the whole question always
//! outranks one that has to cut it.
//!
//! # Examples
//!
//! ```
//! use tui_quiz_types::{ColorProfile, Capabilities, LayoutBudget, Viewport};
//!
//! let caps = Capabilities::full();
//! assert!(caps.color_profile >= ColorProfile::Ansi256);
//!
//! let profile: ColorProfile = "ansi16".parse().unwrap();
//! assert_eq!(profile, ColorProfile::Ansi16);
//!
//! let budget = LayoutBudget::multi_line(40, 3);
//! assert!(budget.multiline);
//!
//! assert!(Viewport::new(0, 24).is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Animation tick interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 33;

/// Ticks demo mode waits in the question state before forcing a transition.
pub const DEMO_TICK_BUDGET: u32 = 150;

/// Maximum number of characters accepted in the answer line.
pub const INPUT_CHAR_LIMIT: usize = 156;

/// Mark placed at the end of truncated text.
pub const ELLIPSIS: char = '…';

/// Block cursor shown after the revealed prefix while the typewriter runs.
pub const REVEAL_CURSOR: char = '█';

/// Score bonus for a theme that shows the full question text.
pub const UNTRUNCATED_BONUS: usize = 2000;

/// Score bonus for a multi-line layout.
pub const MULTILINE_BONUS: usize = 3;

/// Shown in place of the question screen when no theme is active.
pub const NO_THEME_FALLBACK: &str = "No theme selected";

/// Shown before the terminal size is known or when a theme view fails.
pub const LOADING_FALLBACK: &str = "Loading…";

/// Shown when a transition is missing or its view fails.
pub const TRANSITION_FALLBACK: &str = "Loading next level...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_constants_keep_untruncated_dominant() {
        // A fully visible question must beat any truncated one that fits on screen.
        assert!(UNTRUNCATED_BONUS > 1000 + MULTILINE_BONUS);
        assert_eq!(MULTILINE_BONUS, 3);
    }

    #[test]
    fn test_color_profile_orders_by_richness() {
        assert!(ColorProfile::NoColor < ColorProfile::Ansi16);
        assert!(ColorProfile::Ansi16 < ColorProfile::Ansi256);
        assert!(ColorProfile::Ansi256 < ColorProfile::TrueColor);
    }

    #[test]
    fn test_color_profile_round_trips_through_str() {
        for p in [
            ColorProfile::NoColor,
            ColorProfile::Ansi16,
            ColorProfile::Ansi256,
            ColorProfile::TrueColor,
        ] {
            assert_eq!(p.to_string().parse::<ColorProfile>(), Ok(p));
        }
        assert_eq!("24bit".parse::<ColorProfile>(), Ok(ColorProfile::TrueColor));
        assert!("plaid".parse::<ColorProfile>().is_err());
    }

    #[test]
    fn test_capabilities_summary_lists_every_field() {
        let s = Capabilities::minimal().to_string();
        assert!(s.contains("Color Profile: No Color"));
        assert!(s.contains("Unicode Support: No"));
        assert!(s.contains("Interactive: No"));
    }

    #[test]
    fn test_question_defaults_missing_hint() {
        let q: Question =
            serde_json::from_str(r#"{"id":3,"text":"t","answer":"a"}"#).unwrap();
        assert_eq!(q.hint, "");
    }
}

/// A single quiz question.
///
/// Questions are immutable once loaded. Display code clones a question and
/// overwrites only `text` while the typewriter reveal is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub answer: String,
    #[serde(default)]
    pub hint: String,
}

/// Quiz content, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub final_message: String,
    #[serde(default)]
    pub final_hint: String,
}

/// Supported color range of the host terminal, ordered from poorest to richest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorProfile {
    NoColor,
    Ansi16,
    Ansi256,
    TrueColor,
}

impl ColorProfile {
    /// Human-readable label used by the profiler report.
    pub fn label(self) -> &'static str {
        match self {
            ColorProfile::NoColor => "No Color",
            ColorProfile::Ansi16 => "ANSI (16 Colors)",
            ColorProfile::Ansi256 => "ANSI256 (256 Colors)",
            ColorProfile::TrueColor => "TrueColor (16m Colors)",
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorProfile::NoColor => "none",
            ColorProfile::Ansi16 => "ansi16",
            ColorProfile::Ansi256 => "ansi256",
            ColorProfile::TrueColor => "truecolor",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorProfile {
    type Err = String;

    /// Parse a color profile name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "ascii" | "mono" => Ok(ColorProfile::NoColor),
            "ansi" | "ansi16" | "16" => Ok(ColorProfile::Ansi16),
            "ansi256" | "256" => Ok(ColorProfile::Ansi256),
            "truecolor" | "24bit" => Ok(ColorProfile::TrueColor),
            other => Err(format!("unknown color profile: {other}")),
        }
    }
}

/// Detected features of the host terminal.
///
/// Computed once per process and passed by reference to every compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub color_profile: ColorProfile,
    pub has_unicode: bool,
    pub is_interactive: bool,
}

impl Capabilities {
    /// Everything available: truecolor, unicode, interactive.
    pub const fn full() -> Self {
        Self {
            color_profile: ColorProfile::TrueColor,
            has_unicode: true,
            is_interactive: true,
        }
    }

    /// Nothing available: no color, no unicode, not interactive.
    pub const fn minimal() -> Self {
        Self {
            color_profile: ColorProfile::NoColor,
            has_unicode: false,
            is_interactive: false,
        }
    }

    pub fn with_color_profile(mut self, color_profile: ColorProfile) -> Self {
        self.color_profile = color_profile;
        self
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        writeln!(f, "Terminal Capabilities:")?;
        writeln!(f, "  Color Profile: {}", self.color_profile.label())?;
        writeln!(f, "  Unicode Support: {}", yes_no(self.has_unicode))?;
        write!(f, "  Interactive: {}", yes_no(self.is_interactive))
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (size not known yet).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How much question text a theme can show for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutBudget {
    pub max_chars_per_line: usize,
    pub max_lines: usize,
    pub multiline: bool,
}

impl LayoutBudget {
    pub const fn single_line(max_chars_per_line: usize) -> Self {
        Self {
            max_chars_per_line,
            max_lines: 1,
            multiline: false,
        }
    }

    pub const fn multi_line(max_chars_per_line: usize, max_lines: usize) -> Self {
        Self {
            max_chars_per_line,
            max_lines,
            multiline: true,
        }
    }
}

/// Arrow-key direction, used by interactive transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Semantic user input, decoupled from the terminal backend's key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Quit,
    Submit,
    Char(char),
    Backspace,
    ClearLine,
    /// F1: swap in another random compatible theme.
    NextTheme,
    /// F2: replay a transition into the current question.
    ForceTransition,
    /// F3: toggle demo auto-advance.
    ToggleDemo,
    Nav(Direction),
}

/// Discrete event delivered to the state machine and the active renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Tick,
    Input(Input),
    Resize(Viewport),
}

impl Event {
    pub fn is_tick(&self) -> bool {
        matches!(self, Event::Tick)
    }
}
