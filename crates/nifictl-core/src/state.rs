//! Derived state types for lifecycle operations.
//!
//! None of these are stored anywhere: a `ProcessHandle` is a transient
//! lookup result recomputed on every operation (the underlying process
//! may exit at any moment), and a `StatusReport` is composed fresh per
//! invocation from the handle, a liveness check, and one health probe.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;

/// Where a resolved PID came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PidSource {
    /// Recorded by the daemon in its run directory.
    PidFile,
    /// Discovered by scanning the process table.
    ProcessScan,
}

/// A transient PID lookup result with its provenance.
///
/// "Not found" is a normal value here, never an error: callers decide
/// what an absent process means for their operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessHandle {
    /// PID read from the daemon's PID file (corroborated as alive at
    /// lookup time; the file alone is advisory).
    PidFile(u32),
    /// PID found by scanning the process table for the daemon's
    /// bootstrap command line.
    ProcessScan(u32),
    /// No candidate process found.
    None,
}

impl ProcessHandle {
    /// The resolved PID, if any.
    pub const fn pid(&self) -> Option<u32> {
        match self {
            Self::PidFile(pid) | Self::ProcessScan(pid) => Some(*pid),
            Self::None => None,
        }
    }

    /// Provenance of the resolved PID, if any.
    pub const fn source(&self) -> Option<PidSource> {
        match self {
            Self::PidFile(_) => Some(PidSource::PidFile),
            Self::ProcessScan(_) => Some(PidSource::ProcessScan),
            Self::None => None,
        }
    }

    /// Whether no candidate process was found.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Service state derived from liveness and one health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    /// No live daemon process.
    Stopped,
    /// Process alive and the health endpoint answers.
    Running,
    /// Process alive but the health endpoint does not answer.
    RunningUnresponsive,
    /// Contradictory facts, e.g. the health endpoint answers but no
    /// live process was found. Never collapsed into `Running`.
    Unknown,
}

impl ServiceState {
    const fn derive(process_alive: bool, api_available: bool) -> Self {
        match (process_alive, api_available) {
            (true, true) => Self::Running,
            (true, false) => Self::RunningUnresponsive,
            (false, false) => Self::Stopped,
            (false, true) => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::RunningUnresponsive => "running (unresponsive)",
            Self::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Result of a bounded wait loop.
///
/// `TimedOut` is a soft failure: the surrounding operation reports a
/// warning and its best-known final state instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The awaited condition held before the deadline.
    Ready,
    /// The deadline passed first.
    TimedOut,
}

impl PollOutcome {
    /// Whether the awaited condition held.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Point-in-time status, with the underlying facts kept separate so
/// callers can distinguish "process dead" from "process alive but API
/// down".
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub state: ServiceState,
    pub running: bool,
    pub pid: Option<u32>,
    pub pid_source: Option<PidSource>,
    pub process_alive: bool,
    pub api_available: bool,
    pub api_url: String,
    pub web_ui_url: Option<String>,
    pub home: PathBuf,
}

impl StatusReport {
    /// Compose a report from independently gathered facts.
    pub fn compose(
        handle: ProcessHandle,
        process_alive: bool,
        api_available: bool,
        config: &Config,
    ) -> Self {
        let state = ServiceState::derive(process_alive, api_available);
        Self {
            state,
            running: process_alive,
            pid: handle.pid(),
            pid_source: handle.source(),
            process_alive,
            api_available,
            api_url: config.api_base_url.clone(),
            web_ui_url: (state == ServiceState::Running).then(|| config.web_ui_url()),
            home: config.home.clone(),
        }
    }
}

/// Outcome of `start`.
#[derive(Debug)]
pub struct StartReport {
    /// The daemon was already running; no launch was issued.
    pub already_running: bool,
    /// Readiness wait verdict; `None` when the wait was skipped.
    pub readiness: Option<PollOutcome>,
    /// Final state, re-resolved after the operation.
    pub status: StatusReport,
}

/// Outcome of `stop`.
#[derive(Debug)]
pub struct StopReport {
    /// The daemon was running when `stop` was invoked.
    pub was_running: bool,
    /// Shutdown wait verdict; `None` when nothing had to be stopped.
    pub shutdown: Option<PollOutcome>,
}

/// Outcome of `clean`.
#[derive(Debug)]
pub struct CleanReport {
    /// Data directories that were emptied.
    pub cleaned: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_accessors() {
        assert_eq!(ProcessHandle::PidFile(42).pid(), Some(42));
        assert_eq!(ProcessHandle::PidFile(42).source(), Some(PidSource::PidFile));
        assert_eq!(ProcessHandle::ProcessScan(7).source(), Some(PidSource::ProcessScan));
        assert_eq!(ProcessHandle::None.pid(), None);
        assert!(ProcessHandle::None.is_none());
    }

    #[test]
    fn state_derivation_covers_all_fact_pairs() {
        assert_eq!(ServiceState::derive(true, true), ServiceState::Running);
        assert_eq!(ServiceState::derive(true, false), ServiceState::RunningUnresponsive);
        assert_eq!(ServiceState::derive(false, false), ServiceState::Stopped);
        // Health endpoint up with no live process is contradictory data,
        // reported as such rather than as Running.
        assert_eq!(ServiceState::derive(false, true), ServiceState::Unknown);
    }

    #[test]
    fn status_without_process_reports_stopped() {
        let config = Config::new("/opt/nifi");
        let report = StatusReport::compose(ProcessHandle::None, false, false, &config);

        assert_eq!(report.state, ServiceState::Stopped);
        assert!(!report.running);
        assert_eq!(report.pid, None);
        assert_eq!(report.web_ui_url, None);
    }

    #[test]
    fn status_serializes_separate_facts() {
        let config = Config::new("/opt/nifi");
        let report = StatusReport::compose(ProcessHandle::PidFile(1234), true, false, &config);
        let json = serde_json::to_value(&report).expect("serialize");

        assert_eq!(json["state"], "running_unresponsive");
        assert_eq!(json["pid"], 1234);
        assert_eq!(json["pid_source"], "pid_file");
        assert_eq!(json["process_alive"], true);
        assert_eq!(json["api_available"], false);
    }

    #[test]
    fn web_ui_url_only_when_running() {
        let config = Config::new("/opt/nifi");
        let running = StatusReport::compose(ProcessHandle::ProcessScan(9), true, true, &config);
        assert_eq!(running.web_ui_url.as_deref(), Some("http://localhost:8080/nifi"));

        let degraded = StatusReport::compose(ProcessHandle::ProcessScan(9), true, false, &config);
        assert_eq!(degraded.web_ui_url, None);
    }
}
