//! Status command handler.

use nifictl_core::state::{PidSource, StatusReport};
use nifictl_runtime::LifecycleController;

use crate::error::CliError;

/// Execute the status command.
///
/// The underlying facts (PID, liveness, API reachability) are printed
/// separately so "process dead" and "process alive but API down" stay
/// distinguishable.
pub async fn execute(controller: &LifecycleController, json: bool) -> Result<(), CliError> {
    let status = controller.status().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    render_text(&status);
    Ok(())
}

fn render_text(status: &StatusReport) {
    println!("NiFi status:");
    println!("  state:   {}", status.state);

    match (status.pid, status.pid_source) {
        (Some(pid), Some(source)) => println!("  pid:     {pid} ({})", source_label(source)),
        (Some(pid), None) => println!("  pid:     {pid}"),
        _ => println!("  pid:     none"),
    }

    println!("  process: {}", if status.process_alive { "alive" } else { "not found" });
    println!(
        "  api:     {} ({})",
        if status.api_available { "available" } else { "unreachable" },
        status.api_url
    );
    if let Some(url) = &status.web_ui_url {
        println!("  web ui:  {url}");
    }
    println!("  home:    {}", status.home.display());
}

const fn source_label(source: PidSource) -> &'static str {
    match source {
        PidSource::PidFile => "pid file",
        PidSource::ProcessScan => "process scan",
    }
}
