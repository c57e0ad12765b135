//! Shared CLI plumbing: errors, exit codes, data loading, JSON output.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{Config, Language};
use crate::data::{DataError, DataSource, Dataset};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input or nothing found
    ValidationError = 1,
    /// File system or data loading failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or lookup miss (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or data loading failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DataError> for CliError {
    fn from(err: DataError) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type of every subcommand.
pub type CliResult<T> = Result<T, CliError>;

/// Settings shared by all subcommands, resolved from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliContext {
    /// Where element data is loaded from
    pub source: DataSource,
    /// Language for element names
    pub language: Language,
}

impl CliContext {
    /// Resolves flags against the config file.
    ///
    /// `--data-dir` beats `paths.data_dir`, which beats the embedded set.
    pub fn resolve(data_dir: Option<PathBuf>, language: Option<Language>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {e:#}");
            Config::default()
        });
        Self {
            source: DataSource::from_option(data_dir.or(config.paths.data_dir)),
            language: language.unwrap_or(config.ui.language),
        }
    }

    /// Loads the data set.
    pub fn load(&self) -> CliResult<Dataset> {
        Ok(self.source.load()?)
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self {
            source: DataSource::Embedded,
            language: Language::default(),
        }
    }
}

/// Pretty-prints a value as JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
