//! Start command handler.

use nifictl_core::state::PollOutcome;
use nifictl_runtime::LifecycleController;

use crate::error::CliError;

/// Execute the start command.
///
/// A readiness timeout is printed as a warning but still exits 0; the
/// daemon may simply need longer than the wait window.
pub async fn execute(controller: &LifecycleController, no_wait: bool) -> Result<(), CliError> {
    println!("Starting Apache NiFi...");
    let report = controller.start(!no_wait).await?;

    if report.already_running {
        match report.status.pid {
            Some(pid) => println!("NiFi is already running (pid {pid})"),
            None => println!("NiFi is already running"),
        }
        return Ok(());
    }

    match report.readiness {
        Some(PollOutcome::Ready) => println!("NiFi started; the API is answering"),
        Some(PollOutcome::TimedOut) => {
            println!("warning: start command succeeded but the API is not answering yet");
            println!("         it may still be initializing; check `nifictl status` shortly");
        }
        None => println!("NiFi start command issued (readiness wait skipped)"),
    }

    if let Some(pid) = report.status.pid {
        println!("  pid:    {pid}");
    }
    if let Some(url) = &report.status.web_ui_url {
        println!("  web ui: {url}");
    }
    println!("  api:    {}", report.status.api_url);

    Ok(())
}
