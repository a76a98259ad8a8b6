//! Daemon PID resolution: PID file first, process-table scan fallback.

use std::path::PathBuf;

use sysinfo::System;
use tracing::debug;

use nifictl_core::ports::ProcessInspector;
use nifictl_core::state::ProcessHandle;

/// Process name the scan looks for; NiFi runs inside a JVM.
const SCAN_PROCESS_NAME: &str = "java";
/// Substrings that must all appear in the candidate's command line to
/// identify the daemon's bootstrap process.
const SCAN_CMDLINE_MARKERS: [&str; 2] = ["nifi", "bootstrap"];

/// Resolves the daemon's PID and answers OS-level liveness questions.
///
/// A fresh lookup happens on every call; results are never cached, since
/// the underlying process may exit between operations.
pub struct SystemInspector {
    pid_file: PathBuf,
}

impl SystemInspector {
    pub fn new(pid_file: PathBuf) -> Self {
        Self { pid_file }
    }
}

impl ProcessInspector for SystemInspector {
    fn locate(&self) -> ProcessHandle {
        // The PID file is advisory: a recorded PID is only trusted when
        // that process is currently alive. Stale or garbled files fall
        // through to the scan.
        match crate::pidfile::read_pidfile(&self.pid_file) {
            Ok(pid) if crate::liveness::pid_exists(pid) => {
                return ProcessHandle::PidFile(pid);
            }
            Ok(pid) => {
                debug!("PID file names {pid} but no such process; falling back to scan");
            }
            Err(e) => {
                debug!("no usable PID file at {}: {e}", self.pid_file.display());
            }
        }

        match scan_process_table() {
            Some(pid) => ProcessHandle::ProcessScan(pid),
            None => ProcessHandle::None,
        }
    }

    fn is_alive(&self, handle: &ProcessHandle) -> bool {
        handle.pid().is_some_and(crate::liveness::pid_exists)
    }
}

/// Scan the process table for the daemon's bootstrap JVM.
///
/// Multiple matches resolve deterministically to the lowest PID;
/// ambiguity is reduced-confidence data, not an error.
fn scan_process_table() -> Option<u32> {
    let sys = System::new_all();

    let mut candidates: Vec<u32> = sys
        .processes()
        .iter()
        .filter(|(_, process)| {
            if !process
                .name()
                .to_string_lossy()
                .to_lowercase()
                .contains(SCAN_PROCESS_NAME)
            {
                return false;
            }
            let cmdline = process
                .cmd()
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            SCAN_CMDLINE_MARKERS
                .iter()
                .all(|marker| cmdline.contains(marker))
        })
        .map(|(pid, _)| pid.as_u32())
        .collect();

    candidates.sort_unstable();
    candidates.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    #[cfg(unix)]
    fn live_pidfile_wins() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let pid_file = tmp.path().join("nifi.pid");
        // Our own PID is guaranteed alive
        fs::write(&pid_file, format!("{}\n", std::process::id())).expect("write");

        let inspector = SystemInspector::new(pid_file);
        let handle = inspector.locate();

        assert_eq!(handle, ProcessHandle::PidFile(std::process::id()));
        assert!(inspector.is_alive(&handle));
    }

    #[test]
    fn stale_pidfile_is_not_trusted() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let pid_file = tmp.path().join("nifi.pid");
        fs::write(&pid_file, "999999\n").expect("write");

        let inspector = SystemInspector::new(pid_file);
        let handle = inspector.locate();

        // The dead recorded PID must never surface as a pid-file hit;
        // whatever the scan finds (normally nothing) has scan provenance.
        assert!(!matches!(handle, ProcessHandle::PidFile(_)));
    }

    #[test]
    fn missing_pidfile_falls_back_to_scan() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let inspector = SystemInspector::new(tmp.path().join("absent.pid"));

        let handle = inspector.locate();
        assert!(!matches!(handle, ProcessHandle::PidFile(_)));
    }

    #[test]
    fn none_handle_is_never_alive() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let inspector = SystemInspector::new(tmp.path().join("absent.pid"));

        assert!(!inspector.is_alive(&ProcessHandle::None));
    }
}
