//! Restart command handler.

use nifictl_core::state::PollOutcome;
use nifictl_runtime::LifecycleController;

use crate::error::CliError;

/// Execute the restart command.
pub async fn execute(controller: &LifecycleController) -> Result<(), CliError> {
    println!("Restarting Apache NiFi...");
    let report = controller.restart().await?;

    match report.readiness {
        Some(PollOutcome::Ready) => println!("NiFi restarted; the API is answering"),
        Some(PollOutcome::TimedOut) => {
            println!("warning: restart issued but the API is not answering yet");
        }
        None => println!("NiFi restarted"),
    }

    if let Some(pid) = report.status.pid {
        println!("  pid:    {pid}");
    }
    if let Some(url) = &report.status.web_ui_url {
        println!("  web ui: {url}");
    }

    Ok(())
}
