//! Lifecycle orchestration: start, stop, restart, status, clean.
//!
//! The controller holds only the read-only configuration and the three
//! ports; every operation re-resolves the daemon's process handle from
//! scratch. One logical operation runs per invocation; callers serialize
//! concurrent use themselves.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use nifictl_core::config::Config;
use nifictl_core::ensure::ensure_directory;
use nifictl_core::error::ControlError;
use nifictl_core::ports::{HealthProbe, ProcessInspector, ServiceLauncher};
use nifictl_core::state::{CleanReport, PollOutcome, StartReport, StatusReport, StopReport};

use crate::readiness::{wait_until_ready, wait_until_stopped};

pub struct LifecycleController {
    config: Arc<Config>,
    launcher: Arc<dyn ServiceLauncher>,
    probe: Arc<dyn HealthProbe>,
    inspector: Arc<dyn ProcessInspector>,
}

impl LifecycleController {
    pub fn new(
        config: Arc<Config>,
        launcher: Arc<dyn ServiceLauncher>,
        probe: Arc<dyn HealthProbe>,
        inspector: Arc<dyn ProcessInspector>,
    ) -> Self {
        Self {
            config,
            launcher,
            probe,
            inspector,
        }
    }

    /// PID of the daemon if a live process is found right now.
    fn running_pid(&self) -> Option<u32> {
        let handle = self.inspector.locate();
        if self.inspector.is_alive(&handle) {
            handle.pid()
        } else {
            None
        }
    }

    /// Start the daemon.
    ///
    /// Idempotent: an already-running daemon short-circuits to success
    /// without a duplicate launch. A readiness timeout is a warning, not
    /// a failure; the launch command's own exit status decides success.
    pub async fn start(&self, wait_for_ready: bool) -> Result<StartReport, ControlError> {
        self.launcher.preflight()?;

        if let Some(pid) = self.running_pid() {
            info!("NiFi is already running (pid {pid})");
            return Ok(StartReport {
                already_running: true,
                readiness: None,
                status: self.status().await,
            });
        }

        // The daemon expects its run and log directories to exist.
        ensure_directory(&self.config.run_dir())?;
        ensure_directory(&self.config.log_dir())?;

        self.launcher.launch().await?;
        info!("start command accepted");

        let readiness = if wait_for_ready {
            Some(
                wait_until_ready(
                    self.probe.as_ref(),
                    self.config.start_timeout,
                    self.config.ready_poll_interval,
                )
                .await,
            )
        } else {
            None
        };

        Ok(StartReport {
            already_running: false,
            readiness,
            status: self.status().await,
        })
    }

    /// Stop the daemon.
    ///
    /// A daemon that is not running is a successful no-op; the terminate
    /// primitive is not invoked. A shutdown-wait timeout is a warning;
    /// forced-kill escalation is left to the operator.
    pub async fn stop(&self) -> Result<StopReport, ControlError> {
        let Some(pid) = self.running_pid() else {
            info!("NiFi is not running");
            return Ok(StopReport {
                was_running: false,
                shutdown: None,
            });
        };

        info!("stopping NiFi (pid {pid})");
        self.launcher.terminate().await?;

        let shutdown = wait_until_stopped(
            self.inspector.as_ref(),
            self.config.stop_timeout,
            self.config.stop_poll_interval,
        )
        .await;

        if shutdown == PollOutcome::TimedOut {
            warn!(
                "NiFi did not stop within {}s; escalation is left to the operator",
                self.config.stop_timeout.as_secs()
            );
        }

        Ok(StopReport {
            was_running: true,
            shutdown: Some(shutdown),
        })
    }

    /// Stop, settle, start.
    ///
    /// A `stop` that fails outright (the terminate primitive errored, as
    /// opposed to merely timing out) does not prevent the start attempt;
    /// availability wins over strict sequencing.
    pub async fn restart(&self) -> Result<StartReport, ControlError> {
        info!("restarting NiFi");

        if let Err(e) = self.stop().await {
            warn!("stop failed during restart: {e}; attempting start anyway");
        }

        tokio::time::sleep(self.config.restart_settle).await;

        self.start(true).await
    }

    /// Pure read: resolve the handle, check liveness, probe the health
    /// endpoint once, and report the facts separately.
    pub async fn status(&self) -> StatusReport {
        let handle = self.inspector.locate();
        let alive = self.inspector.is_alive(&handle);
        let api_available = self.probe.check().await;
        StatusReport::compose(handle, alive, api_available, &self.config)
    }

    /// Empty the daemon's data directories. DESTRUCTIVE.
    ///
    /// Refused unconditionally while a live daemon process exists; the
    /// directories themselves are kept, only their contents go. Callers
    /// are responsible for confirming with the user first.
    pub fn clean(&self) -> Result<CleanReport, ControlError> {
        if let Some(pid) = self.running_pid() {
            return Err(ControlError::UnsafeOperation {
                operation: "clean data directories",
                pid,
            });
        }

        let mut cleaned = Vec::new();
        for dir in self.config.data_dirs() {
            if !dir.exists() {
                continue;
            }
            remove_dir_contents(&dir)?;
            info!("emptied {}", dir.display());
            cleaned.push(dir);
        }

        Ok(CleanReport { cleaned })
    }
}

/// Remove every entry under `dir`, keeping the directory itself.
fn remove_dir_contents(dir: &Path) -> Result<(), ControlError> {
    for entry in fs::read_dir(dir).map_err(|e| ControlError::io(dir, e))? {
        let entry = entry.map_err(|e| ControlError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ControlError::io(&path, e))?;
        let result = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| ControlError::io(&path, e))?;
    }
    Ok(())
}
