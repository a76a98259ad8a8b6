//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the controller expects from the operating system and
//! the daemon's own control surface. Implementations live in
//! `nifictl-runtime`; tests substitute mocks.
//!
//! # Design Rules
//!
//! - Express intent, not implementation detail
//! - No HTTP or process-spawning types in any signature
//! - Must support mock implementations for controller tests

use async_trait::async_trait;

use crate::error::ControlError;
use crate::state::ProcessHandle;

/// The daemon's opaque launch/terminate primitive.
///
/// The controller never reimplements the daemon's startup sequence; it
/// delegates to the daemon's own control mechanism and observes the
/// success/failure signal.
#[async_trait]
pub trait ServiceLauncher: Send + Sync {
    /// Verify the pre-start requirements without side effects.
    ///
    /// Returns `ControlError::PrerequisiteMissing` when the launch
    /// cannot possibly succeed (missing script, missing runtime).
    fn preflight(&self) -> Result<(), ControlError>;

    /// Ask the daemon to start. Success means the control command was
    /// accepted, not that the daemon is ready.
    async fn launch(&self) -> Result<(), ControlError>;

    /// Ask the daemon to shut down gracefully. No forced-kill
    /// escalation happens here.
    async fn terminate(&self) -> Result<(), ControlError>;
}

/// One lightweight health check against the daemon's API.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// `true` when the health endpoint answered with a success status.
    /// Connection errors, timeouts, and non-2xx responses are all
    /// `false`; the probe never errors.
    async fn check(&self) -> bool;
}

/// PID resolution and OS-level liveness.
pub trait ProcessInspector: Send + Sync {
    /// Resolve the daemon's current process handle: PID file first,
    /// process-table scan as fallback, `ProcessHandle::None` when
    /// neither yields a live candidate.
    fn locate(&self) -> ProcessHandle;

    /// Whether the handle currently corresponds to a signalable
    /// process. `false` for `ProcessHandle::None` without probing.
    fn is_alive(&self, handle: &ProcessHandle) -> bool;
}
