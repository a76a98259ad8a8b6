//! Info command handler.
//!
//! Displays resolved installation paths for diagnostics; the quickest
//! way to see why a `start` preflight failed.

use std::path::Path;

use nifictl_core::Config;

use crate::error::CliError;

/// Execute the info command.
pub fn execute(config: &Config) -> Result<(), CliError> {
    print_path("home", &config.home);
    print_path("launcher script", &config.launcher_script());
    print_path("pid file", &config.pid_file());
    print_path("log dir", &config.log_dir());
    print_path("app log", &config.app_log());
    println!("{:<16} = {}", "api base url", config.api_base_url);
    println!("{:<16} = {}", "web ui url", config.web_ui_url());
    Ok(())
}

fn print_path(label: &str, path: &Path) {
    let marker = if path.exists() { "" } else { " (missing)" };
    println!("{label:<16} = {}{marker}", path.display());
}
