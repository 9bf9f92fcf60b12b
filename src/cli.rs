//! Command line flags. Every flag can also be set from the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::{Completion, ModelOptions};
use crate::types::ColorProfile;

#[derive(Debug, Parser)]
#[command(
    name = "tui-quiz",
    version,
    about = "Terminal quiz game with randomized visual themes and animated transitions"
)]
pub struct Cli {
    /// Print the terminal capability report and renderer compatibility, then exit.
    #[arg(short, long)]
    pub profile: bool,

    /// Load questions from a plain JSON file instead of the embedded set.
    #[arg(long, env = "TUI_QUIZ_QUESTIONS", value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Seed for theme and transition selection.
    #[arg(long, env = "TUI_QUIZ_SEED")]
    pub seed: Option<u64>,

    /// Start with demo auto-advance enabled (toggle in game with F3).
    #[arg(long, env = "TUI_QUIZ_DEMO")]
    pub demo: bool,

    /// Wrap to the first question instead of ending on the success screen.
    #[arg(long, env = "TUI_QUIZ_ENDLESS")]
    pub endless: bool,

    /// Override the detected color profile (none, ansi16, ansi256, truecolor).
    #[arg(long, env = "TUI_QUIZ_COLOR", value_name = "PROFILE")]
    pub color: Option<ColorProfile>,

    /// Write logs to this file. Filter with RUST_LOG (default: info).
    #[arg(long, env = "TUI_QUIZ_LOG", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            seed: self.seed,
            completion: if self.endless {
                Completion::Endless
            } else {
                Completion::Finish
            },
            demo: self.demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_model_options() {
        let cli = Cli::try_parse_from(["tui-quiz", "--seed", "7", "--endless", "--demo"]).unwrap();
        let options = cli.model_options();
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.completion, Completion::Endless);
        assert!(options.demo);
    }

    #[test]
    fn test_color_override_parses() {
        let cli = Cli::try_parse_from(["tui-quiz", "--color", "ansi16"]).unwrap();
        assert_eq!(cli.color, Some(ColorProfile::Ansi16));
        assert!(Cli::try_parse_from(["tui-quiz", "--color", "sepia"]).is_err());
    }
}
