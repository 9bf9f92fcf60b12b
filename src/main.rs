//! Terminal quiz runner (default binary).
//!
//! Loads the quiz content, probes the terminal, then drives the engine's state machine
//! from crossterm events and a single tick deadline. The framebuffer-style renderer
//! flushes one canvas per handled event.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent};
use tracing::{info, warn};

use tui_quiz::cli::Cli;
use tui_quiz::core::{load_embedded, load_from_path};
use tui_quiz::engine::{panic_message, Command, Model};
use tui_quiz::input::map_key;
use tui_quiz::scenes::Registry;
use tui_quiz::term::{detect, TerminalRenderer};
use tui_quiz::types::{Config, Event, Viewport, TICK_MS};
use tui_quiz::{logging, profile};

/// How long to block on input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run_app(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_app(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }
    logging::install_panic_hook();

    let config = load_config(cli.questions.as_deref())?;
    info!(questions = config.questions.len(), "content loaded");

    let mut caps = detect();
    if let Some(profile) = cli.color {
        caps = caps.with_color_profile(profile);
    }
    info!(
        color = %caps.color_profile,
        unicode = caps.has_unicode,
        interactive = caps.is_interactive,
        "terminal capabilities"
    );

    let registry = Registry::builtin();
    if cli.profile {
        let mut stdout = io::stdout().lock();
        profile::write_report(&mut stdout, &caps, &registry)?;
        return Ok(());
    }
    if !caps.is_interactive {
        warn!("stdout is not a terminal");
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let model = Model::new(
        config,
        registry,
        caps,
        Viewport::new(w, h),
        cli.model_options(),
    );

    let mut term = TerminalRenderer::new(caps.color_profile);
    term.enter()?;
    logging::set_screen_active(true);

    let result = panic::catch_unwind(AssertUnwindSafe(|| run(&mut term, model)));

    // Always try to restore terminal state.
    logging::set_screen_active(false);
    let restored = term.exit();
    match result {
        Ok(result) => result.and(restored),
        Err(payload) => Err(anyhow!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from_path(path).context("loading questions"),
        None => load_embedded().context("loading embedded questions"),
    }
}

fn run(term: &mut TerminalRenderer, mut model: Model) -> Result<()> {
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut next_tick: Option<Instant> = None;

    for command in model.init() {
        if command == Command::ScheduleTick {
            next_tick.get_or_insert_with(|| Instant::now() + tick_duration);
        }
    }
    term.draw(model.view())?;

    loop {
        // A due tick goes first so a stream of keys cannot starve animation.
        let now = Instant::now();
        let event = match next_tick {
            Some(at) if now >= at => {
                next_tick = None;
                Some(Event::Tick)
            }
            _ => {
                let timeout = next_tick.map_or(IDLE_POLL, |at| at.saturating_duration_since(now));
                if event::poll(timeout)? {
                    translate(event::read()?)
                } else {
                    None
                }
            }
        };
        let Some(event) = event else {
            continue;
        };
        if matches!(event, Event::Resize(_)) {
            term.invalidate();
        }

        for command in model.update(event) {
            match command {
                Command::Quit => return Ok(()),
                Command::ScheduleTick => {
                    next_tick.get_or_insert_with(|| Instant::now() + tick_duration);
                }
            }
        }

        term.draw(model.view())?;
    }
}

fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key(key).map(Event::Input),
        TermEvent::Resize(w, h) => Some(Event::Resize(Viewport::new(w, h))),
        _ => None,
    }
}
