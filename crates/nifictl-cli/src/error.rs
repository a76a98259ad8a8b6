//! CLI-specific error type and exit-code mapping.

use nifictl_core::error::{ConfigError, ControlError, LogError};
use thiserror::Error;

/// CLI-facing error carrying a Unix exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Lifecycle operation error.
    #[error("{0}")]
    Control(#[from] ControlError),

    /// Configuration resolution error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log viewer error.
    #[error("{0}")]
    Logs(#[from] LogError),

    /// HTTP client construction error.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal I/O error (confirmation prompt).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success (including no-ops)
    /// - 1: General error
    /// - 64-78: sysexits.h categories where one fits
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Control(ControlError::PrerequisiteMissing(_)) => 78, // EX_CONFIG
            Self::Control(ControlError::ExternalCommandFailed { .. }) => 71, // EX_OSERR
            Self::Control(ControlError::UnsafeOperation { .. }) => 1,
            Self::Control(ControlError::NotADirectory(_) | ControlError::Io { .. }) => 74, // EX_IOERR
            Self::Config(_) => 78,                                     // EX_CONFIG
            Self::Logs(LogError::NotFound(_)) => 66,                   // EX_NOINPUT
            Self::Logs(LogError::Io(_)) | Self::Io(_) => 74,           // EX_IOERR
            Self::Http(_) => 69,                                       // EX_UNAVAILABLE
            Self::Json(_) => 70,                                       // EX_SOFTWARE
        }
    }
}
