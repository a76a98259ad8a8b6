//! Error taxonomy for lifecycle operations.
//!
//! Timeouts are deliberately absent from `ControlError`: a readiness or
//! shutdown wait that expires degrades to a warning plus a final state
//! re-check (see `PollOutcome`), it never aborts the surrounding
//! operation. Every other failure aborts immediately and is surfaced
//! verbatim to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by lifecycle operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// A pre-start requirement is not satisfied (launcher script missing
    /// or not executable, no Java runtime on `PATH`).
    #[error("prerequisite missing: {0}")]
    PrerequisiteMissing(String),

    /// The daemon's own control script reported failure or did not
    /// return within its bound.
    #[error("external command `{command}` failed: {reason}")]
    ExternalCommandFailed { command: String, reason: String },

    /// A destructive operation was refused because the daemon is running.
    /// There is no override; the caller must stop the daemon first.
    #[error("refusing to {operation} while NiFi is running (pid {pid})")]
    UnsafeOperation {
        operation: &'static str,
        pid: u32,
    },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ControlError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from environment-based configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `NIFI_HOME` nor a home directory to derive a default from.
    #[error("cannot determine NiFi home; set NIFI_HOME")]
    NoHome,

    /// An environment variable held a value that does not parse.
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Errors from the log viewer.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file does not exist yet. Non-fatal; callers report an
    /// empty log rather than aborting.
    #[error("log file not found: {0}")]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
