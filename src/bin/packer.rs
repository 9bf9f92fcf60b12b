//! Packs a plain JSON quiz into the obfuscated blob embedded by `tui-quiz-core`.
//!
//! ```text
//! packer assets/questions.json crates/core/assets/questions.bin
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tui_quiz::core::{obfuscate, parse_config};

#[derive(Debug, Parser)]
#[command(name = "packer", version, about = "Pack quiz JSON into the embedded blob format")]
struct Args {
    /// Plain JSON quiz file.
    input: PathBuf,
    /// Where to write the obfuscated blob.
    output: PathBuf,
}

fn main() -> ExitCode {
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let data = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let config =
        parse_config(&data).with_context(|| format!("validating {}", args.input.display()))?;

    fs::write(&args.output, obfuscate(&data))
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Packed {} questions ({} bytes) into {}",
        config.questions.len(),
        data.len(),
        args.output.display()
    );
    Ok(())
}
