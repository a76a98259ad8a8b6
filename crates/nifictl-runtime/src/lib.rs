//! Process runtime and OS-level adapters for the NiFi lifecycle
//! controller.
//!
//! Implements the ports defined in `nifictl-core` against the real
//! operating system: the advisory PID file, signal-0 liveness, the
//! process table, the daemon's own control script, and its HTTP health
//! endpoint. The `LifecycleController` orchestrates them.

pub mod controller;
pub mod launcher;
pub mod liveness;
pub mod locate;
pub mod logs;
pub mod pidfile;
pub mod probe;
pub mod readiness;

pub use controller::LifecycleController;
pub use launcher::ScriptLauncher;
pub use locate::SystemInspector;
pub use probe::HttpHealthProbe;
pub use readiness::{wait_until_ready, wait_until_stopped};
