//! Launch/terminate adapter delegating to the daemon's control script.
//!
//! The controller never reimplements NiFi's startup sequence: it runs
//! `<home>/bin/nifi.sh start|stop` and observes the exit status.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};
use which::which;

use nifictl_core::error::ControlError;
use nifictl_core::ports::ServiceLauncher;

/// Runs the daemon's control script with a bounded wait per invocation.
pub struct ScriptLauncher {
    script: PathBuf,
    home: PathBuf,
    command_timeout: Duration,
}

impl ScriptLauncher {
    pub fn new(script: PathBuf, home: PathBuf, command_timeout: Duration) -> Self {
        Self {
            script,
            home,
            command_timeout,
        }
    }

    async fn run(&self, action: &str) -> Result<(), ControlError> {
        let command_label = format!("{} {action}", self.script.display());
        debug!("running `{command_label}`");

        let result = tokio::time::timeout(
            self.command_timeout,
            Command::new(&self.script)
                .arg(action)
                .current_dir(&self.home)
                .output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(ControlError::ExternalCommandFailed {
                    command: command_label,
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                return Err(ControlError::ExternalCommandFailed {
                    command: command_label,
                    reason: format!("timed out after {}s", self.command_timeout.as_secs()),
                });
            }
        };

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match output.status.code() {
            Some(code) if stderr.trim().is_empty() => format!("exit code {code}"),
            Some(code) => format!("exit code {code}: {}", stderr.trim()),
            None => "terminated by signal".to_string(),
        };
        Err(ControlError::ExternalCommandFailed {
            command: command_label,
            reason,
        })
    }
}

#[async_trait]
impl ServiceLauncher for ScriptLauncher {
    fn preflight(&self) -> Result<(), ControlError> {
        if !self.script.exists() {
            return Err(ControlError::PrerequisiteMissing(format!(
                "launcher script not found: {}",
                self.script.display()
            )));
        }
        if !is_executable(&self.script) {
            return Err(ControlError::PrerequisiteMissing(format!(
                "launcher script is not executable: {}",
                self.script.display()
            )));
        }
        // NiFi is JVM-hosted; without java the script cannot succeed.
        if which("java").is_err() {
            return Err(ControlError::PrerequisiteMissing(
                "no `java` executable on PATH".to_string(),
            ));
        }
        Ok(())
    }

    async fn launch(&self) -> Result<(), ControlError> {
        info!("invoking {} start", self.script.display());
        self.run("start").await
    }

    async fn terminate(&self) -> Result<(), ControlError> {
        info!("invoking {} stop", self.script.display());
        self.run("stop").await
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn launcher_for(script: PathBuf, home: PathBuf) -> ScriptLauncher {
        ScriptLauncher::new(script, home, Duration::from_secs(5))
    }

    #[test]
    fn preflight_rejects_missing_script() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let launcher = launcher_for(tmp.path().join("bin/nifi.sh"), tmp.path().to_path_buf());

        let err = launcher.preflight().expect_err("should reject");
        assert!(matches!(err, ControlError::PrerequisiteMissing(_)));
    }

    #[test]
    #[cfg(unix)]
    fn preflight_rejects_non_executable_script() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("mkdir");
        let script = bin.join("nifi.sh");
        fs::write(&script, "#!/bin/sh\nexit 0\n").expect("write");
        // Default mode has no execute bit on the fresh file
        let launcher = launcher_for(script, tmp.path().to_path_buf());

        let err = launcher.preflight().expect_err("should reject");
        assert!(matches!(err, ControlError::PrerequisiteMissing(_)));
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn successful_script_run_is_ok() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let script = tmp.path().join("nifi.sh");
        fs::write(&script, "#!/bin/sh\nexit 0\n").expect("write");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

        let launcher = launcher_for(script, tmp.path().to_path_buf());
        launcher.launch().await.expect("launch should succeed");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn failing_script_surfaces_exit_code_and_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let script = tmp.path().join("nifi.sh");
        fs::write(&script, "#!/bin/sh\necho boom >&2\nexit 3\n").expect("write");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

        let launcher = launcher_for(script, tmp.path().to_path_buf());
        let err = launcher.terminate().await.expect_err("should fail");

        match err {
            ControlError::ExternalCommandFailed { reason, .. } => {
                assert!(reason.contains("exit code 3"), "reason: {reason}");
                assert!(reason.contains("boom"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
