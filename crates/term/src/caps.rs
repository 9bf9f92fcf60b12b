//! Terminal capability probe.
//!
//! Detection runs once at startup from environment variables plus a tty check on
//! stdout. [`detect_from_inputs`] is the pure half, so tests can drive it without
//! touching the process environment.

use std::env;
use std::io;

use crossterm::tty::IsTty;

use crate::types::{Capabilities, ColorProfile};

/// Terminal programs that are known to render 24-bit color.
const TRUECOLOR_TERMINALS: &[&str] = &[
    "iTerm.app",
    "WezTerm",
    "Alacritty",
    "Ghostty",
    "kitty",
    "Rio",
    "Hyper",
    "vscode",
];

/// Everything the probe looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectInputs {
    pub no_color: bool,
    pub term: String,
    pub term_program: String,
    pub colorterm: String,
    /// `LANG`, `LC_ALL`, `LC_CTYPE` in that order.
    pub locale: Vec<String>,
    pub stdout_is_tty: bool,
}

impl DetectInputs {
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            term: env::var("TERM").unwrap_or_default(),
            term_program: env::var("TERM_PROGRAM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            locale: ["LANG", "LC_ALL", "LC_CTYPE"]
                .iter()
                .map(|k| env::var(k).unwrap_or_default())
                .collect(),
            stdout_is_tty: io::stdout().is_tty(),
        }
    }
}

/// Probe the current process environment.
pub fn detect() -> Capabilities {
    detect_from_inputs(&DetectInputs::from_env())
}

pub fn detect_from_inputs(inputs: &DetectInputs) -> Capabilities {
    Capabilities {
        color_profile: detect_color(inputs),
        has_unicode: detect_unicode(inputs),
        is_interactive: inputs.stdout_is_tty,
    }
}

fn detect_color(inputs: &DetectInputs) -> ColorProfile {
    let term = inputs.term.as_str();
    if !inputs.stdout_is_tty || inputs.no_color || term == "dumb" {
        return ColorProfile::NoColor;
    }

    let colorterm = inputs.colorterm.to_ascii_lowercase();
    let modern = TRUECOLOR_TERMINALS
        .iter()
        .any(|t| inputs.term_program.contains(t) || term.contains(&t.to_lowercase()));
    if colorterm.contains("truecolor") || colorterm.contains("24bit") || modern {
        return ColorProfile::TrueColor;
    }

    if term.contains("256") {
        ColorProfile::Ansi256
    } else if !term.is_empty() {
        ColorProfile::Ansi16
    } else {
        ColorProfile::NoColor
    }
}

// A UTF-8 locale wins; otherwise anything but a dumb terminal is assumed capable.
fn detect_unicode(inputs: &DetectInputs) -> bool {
    let utf8_locale = inputs.locale.iter().any(|v| {
        let v = v.to_ascii_lowercase();
        v.contains("utf-8") || v.contains("utf8")
    });
    utf8_locale || inputs.term != "dumb"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty(term: &str) -> DetectInputs {
        DetectInputs {
            term: term.to_string(),
            stdout_is_tty: true,
            ..DetectInputs::default()
        }
    }

    #[test]
    fn test_color_tiers() {
        assert_eq!(detect_color(&tty("xterm")), ColorProfile::Ansi16);
        assert_eq!(detect_color(&tty("xterm-256color")), ColorProfile::Ansi256);
        assert_eq!(detect_color(&tty("")), ColorProfile::NoColor);

        let mut inputs = tty("xterm-256color");
        inputs.colorterm = "truecolor".into();
        assert_eq!(detect_color(&inputs), ColorProfile::TrueColor);

        let mut inputs = tty("xterm");
        inputs.term_program = "WezTerm".into();
        assert_eq!(detect_color(&inputs), ColorProfile::TrueColor);
    }

    #[test]
    fn test_no_color_and_dumb_disable_color() {
        let mut inputs = tty("xterm-256color");
        inputs.no_color = true;
        assert_eq!(detect_color(&inputs), ColorProfile::NoColor);
        assert_eq!(detect_color(&tty("dumb")), ColorProfile::NoColor);
    }

    #[test]
    fn test_piped_output_is_not_interactive() {
        let inputs = DetectInputs {
            term: "xterm-256color".into(),
            ..DetectInputs::default()
        };
        let caps = detect_from_inputs(&inputs);
        assert!(!caps.is_interactive);
        assert_eq!(caps.color_profile, ColorProfile::NoColor);
    }

    #[test]
    fn test_unicode_detection() {
        assert!(detect_unicode(&tty("xterm")));
        assert!(!detect_unicode(&tty("dumb")));

        let mut inputs = tty("dumb");
        inputs.locale = vec!["en_US.UTF-8".into()];
        assert!(detect_unicode(&inputs));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let mut inputs = tty("screen-256color");
        inputs.locale = vec!["C".into()];
        assert_eq!(detect_from_inputs(&inputs), detect_from_inputs(&inputs));
    }
}
