use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, xdg_dir};

/// Directory for the `lilt.<date>.log` files: `log.dir`, else `$XDG_STATE_HOME/lilt` or
/// `~/.local/state/lilt`.
pub fn log_dir(settings: &LogSettings) -> Option<PathBuf> {
    settings
        .dir
        .clone()
        .or_else(|| xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("lilt")))
}

/// Send `tracing` output to a daily-rolling file; the terminal belongs to the UI.
///
/// Returns `None` (logging disabled) when no log directory is usable. The
/// guard must be held until exit so buffered lines get flushed.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let dir = log_dir(settings)?;
    // Creates the directory; fails instead of panicking when it can't be written.
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("lilt")
        .filename_suffix("log")
        .build(&dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_env("LILT_LOG").unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .ok()?;

    Some(guard)
}
