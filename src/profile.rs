//! `--profile`: terminal capability report and per-renderer compatibility.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::scenes::Registry;
use crate::types::{Capabilities, ColorProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSummary {
    pub compatible: usize,
    pub incompatible: usize,
}

/// Write the profiler report for `caps` and return the theme tally.
///
/// Styling is only emitted when the terminal supports color.
pub fn write_report<W: Write>(
    out: &mut W,
    caps: &Capabilities,
    registry: &Registry,
) -> io::Result<ProfileSummary> {
    let styled = caps.color_profile > ColorProfile::NoColor;
    let heading = |s: &str| {
        if styled {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    };
    let status = |pass: bool| {
        let label = if pass { " [PASS] " } else { " [FAIL] " };
        match (styled, pass) {
            (false, _) => label.to_string(),
            (true, true) => label.green().to_string(),
            (true, false) => label.red().to_string(),
        }
    };

    writeln!(out, "{}", heading("=== TERMINAL PROFILER ==="))?;
    writeln!(out, "{caps}")?;
    writeln!(out)?;

    let mut summary = ProfileSummary::default();
    writeln!(out, "{}", heading("Checking Themes:"))?;
    for ctor in registry.list_themes() {
        let theme = ctor();
        let pass = theme.is_compatible(caps);
        writeln!(out, "{} {}", status(pass), theme.name())?;
        if pass {
            summary.compatible += 1;
        } else {
            summary.incompatible += 1;
            writeln!(
                out,
                "    Reason: incompatible with current capabilities (ColorProfile={}, Unicode={})",
                caps.color_profile, caps.has_unicode
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Checking Transitions:"))?;
    for ctor in registry.list_transitions() {
        let transition = ctor();
        writeln!(
            out,
            "{} {}",
            status(transition.is_compatible(caps)),
            transition.name()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Summary: {} Compatible, {} Incompatible",
        summary.compatible, summary.incompatible
    )?;
    if summary.incompatible > 0 {
        writeln!(out, "Some themes are disabled in this environment.")?;
    } else {
        writeln!(out, "All systems operational.")?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(caps: &Capabilities) -> (String, ProfileSummary) {
        let mut out = Vec::new();
        let summary = write_report(&mut out, caps, &Registry::builtin()).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_full_terminal_passes_everything() {
        let (text, summary) = report(&Capabilities::full());
        assert_eq!(summary.incompatible, 0);
        assert_eq!(summary.compatible, Registry::builtin().list_themes().len());
        assert!(text.contains("All systems operational."));
        assert!(text.contains("Root Shell"));
        assert!(text.contains("Tic-Tac-Toe"));
    }

    #[test]
    fn test_minimal_terminal_reports_failures_without_escapes() {
        let (text, summary) = report(&Capabilities::minimal());
        assert!(summary.incompatible > 0);
        assert!(summary.compatible >= 1);
        assert!(text.contains(" [FAIL] "));
        assert!(text.contains("Some themes are disabled in this environment."));
        assert!(!text.contains('\u{1b}'));
    }
}
