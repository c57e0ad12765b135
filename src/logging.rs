//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file in the config
//! directory. Subcommands and the web server log to a stream.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` if set, else `debug` when verbose, else `quiet`.
fn filter(verbose: bool, quiet: &str) -> EnvFilter {
    let default = if verbose { "debug" } else { quiet };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Logs to stderr. `RUST_LOG` overrides the level.
///
/// A second call is a no-op.
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, "warn"))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Logs to stdout, for the web server.
pub fn init_stdout(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, "info"))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Appends to the log file at `path`, creating parent directories.
pub fn init_file(path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(filter(verbose, "info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init();
    Ok(())
}
