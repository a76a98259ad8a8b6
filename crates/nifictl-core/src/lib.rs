//! Pure domain layer for the NiFi lifecycle controller.
//!
//! This crate owns the immutable configuration, the error taxonomy, the
//! state types derived on every invocation, and the port traits that the
//! runtime adapters implement. It performs no process, network, or
//! filesystem side effects of its own (apart from the directory-ensure
//! helper, which the controller uses before launching).

pub mod config;
pub mod ensure;
pub mod error;
pub mod ports;
pub mod state;

// Re-export commonly used types for convenience
pub use config::Config;
pub use ensure::ensure_directory;
pub use error::{ConfigError, ControlError, LogError};
pub use ports::{HealthProbe, ProcessInspector, ServiceLauncher};
pub use state::{
    CleanReport, PidSource, PollOutcome, ProcessHandle, ServiceState, StartReport, StatusReport,
    StopReport,
};
