//! Immutable controller configuration resolved from the environment.
//!
//! Every path the controller touches derives from the NiFi installation
//! root. The value is built once at startup and shared read-only across
//! components; nothing mutates it during a run.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable naming the NiFi installation root.
pub const ENV_HOME: &str = "NIFI_HOME";
/// Environment variable overriding the REST API base URL.
pub const ENV_BASE_URL: &str = "NIFI_BASE_URL";
/// Environment variable for the web UI host reported by `status`.
pub const ENV_WEB_HOST: &str = "NIFI_WEB_HTTP_HOST";
/// Environment variable for the web UI port reported by `status`.
pub const ENV_WEB_PORT: &str = "NIFI_WEB_HTTP_PORT";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/nifi-api";
const DEFAULT_WEB_HOST: &str = "localhost";
const DEFAULT_WEB_PORT: u16 = 8080;

/// Names of the data directories emptied by the destructive `clean`
/// operation, relative to the installation root.
pub const DATA_DIR_NAMES: [&str; 4] = [
    "database_repository",
    "flowfile_repository",
    "content_repository",
    "provenance_repository",
];

/// Immutable configuration for one controller instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// NiFi installation root.
    pub home: PathBuf,
    /// REST API base URL, without a trailing slash.
    pub api_base_url: String,
    /// Host part of the web UI URL reported by `status`.
    pub web_host: String,
    /// Port part of the web UI URL reported by `status`.
    pub web_port: u16,
    /// Bound on the readiness poll after `start`.
    pub start_timeout: Duration,
    /// Interval between readiness probes.
    pub ready_poll_interval: Duration,
    /// Bound on the liveness-clear poll after `stop`.
    pub stop_timeout: Duration,
    /// Interval between liveness checks while stopping.
    pub stop_poll_interval: Duration,
    /// Pause between `stop` and `start` during a restart.
    pub restart_settle: Duration,
    /// Per-request timeout for a single health probe.
    pub probe_timeout: Duration,
    /// Bound on one invocation of the daemon's control script.
    pub command_timeout: Duration,
}

impl Config {
    /// Build a configuration for the given installation root with
    /// default URLs and timeouts.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            web_host: DEFAULT_WEB_HOST.to_string(),
            web_port: DEFAULT_WEB_PORT,
            start_timeout: Duration::from_secs(120),
            ready_poll_interval: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(60),
            stop_poll_interval: Duration::from_secs(2),
            restart_settle: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(5),
            command_timeout: Duration::from_secs(60),
        }
    }

    /// Resolve a configuration from the environment.
    ///
    /// `home_override` (the CLI's `--nifi-home`) wins over `NIFI_HOME`;
    /// when neither is set, `~/nifi` is assumed. `NIFI_BASE_URL`,
    /// `NIFI_WEB_HTTP_HOST` and `NIFI_WEB_HTTP_PORT` override the
    /// defaults; timeouts are fixed here and adjusted per invocation via
    /// CLI flags.
    pub fn resolve(home_override: Option<&Path>) -> Result<Self, ConfigError> {
        let home = match home_override {
            Some(path) => path.to_path_buf(),
            None => match env::var(ENV_HOME) {
                Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
                _ => dirs::home_dir().ok_or(ConfigError::NoHome)?.join("nifi"),
            },
        };

        let mut config = Self::new(home);

        if let Ok(url) = env::var(ENV_BASE_URL)
            && !url.trim().is_empty()
        {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(host) = env::var(ENV_WEB_HOST)
            && !host.trim().is_empty()
        {
            config.web_host = host;
        }
        if let Ok(port) = env::var(ENV_WEB_PORT) {
            config.web_port = port.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_WEB_PORT,
                value: port,
            })?;
        }

        Ok(config)
    }

    /// Path to the daemon's own control script.
    pub fn launcher_script(&self) -> PathBuf {
        self.home.join("bin").join("nifi.sh")
    }

    /// Directory the daemon records its PID file in.
    pub fn run_dir(&self) -> PathBuf {
        self.home.join("run")
    }

    /// Path to the advisory PID file.
    pub fn pid_file(&self) -> PathBuf {
        self.run_dir().join("nifi.pid")
    }

    /// Directory the daemon writes its logs to.
    pub fn log_dir(&self) -> PathBuf {
        self.home.join("logs")
    }

    /// Path to the application log consumed by the log viewer.
    pub fn app_log(&self) -> PathBuf {
        self.log_dir().join("nifi-app.log")
    }

    /// Data directories emptied by `clean`.
    pub fn data_dirs(&self) -> Vec<PathBuf> {
        DATA_DIR_NAMES.iter().map(|name| self.home.join(name)).collect()
    }

    /// Health-check endpoint polled for readiness.
    pub fn diagnostics_url(&self) -> String {
        format!("{}/system-diagnostics", self.api_base_url)
    }

    /// Web UI address reported by `status` while running.
    pub fn web_ui_url(&self) -> String {
        format!("http://{}:{}/nifi", self.web_host, self.web_port)
    }
}
