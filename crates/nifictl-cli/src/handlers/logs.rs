//! Logs command handler.

use nifictl_core::Config;
use nifictl_core::error::LogError;
use nifictl_runtime::logs::tail;

use crate::error::CliError;

/// Execute the logs command.
///
/// A missing log file is a no-op success, not a failure: the daemon may
/// simply never have run yet.
pub fn execute(config: &Config, lines: usize) -> Result<(), CliError> {
    match tail(&config.app_log(), lines) {
        Ok(log_lines) => {
            if log_lines.is_empty() {
                println!("No logs available");
                return Ok(());
            }
            for line in log_lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(LogError::NotFound(path)) => {
            println!("No logs available (no file at {})", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
