//! File logging and the panic hook.
//!
//! stdout and stderr belong to the full-screen UI, so logs only go to a file, and only
//! when one is configured.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Install a `tracing` subscriber writing to `path`. The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init(path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file.to_string_lossy())
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("cannot install log subscriber: {err}"))
}

/// Route panic messages to the log while the alternate screen is up; outside of it
/// the default hook still prints to stderr.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic");
        if !SCREEN_ACTIVE.load(Ordering::Relaxed) {
            default_hook(info);
        }
    }));
}

/// Tell the panic hook whether the terminal is in full-screen mode.
pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::Relaxed);
}
