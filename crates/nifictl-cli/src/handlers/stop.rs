//! Stop command handler.

use nifictl_core::state::PollOutcome;
use nifictl_runtime::LifecycleController;

use crate::error::CliError;

/// Execute the stop command.
pub async fn execute(controller: &LifecycleController) -> Result<(), CliError> {
    println!("Stopping Apache NiFi...");
    let report = controller.stop().await?;

    if !report.was_running {
        println!("NiFi is not running");
        return Ok(());
    }

    match report.shutdown {
        Some(PollOutcome::Ready) => println!("NiFi stopped"),
        Some(PollOutcome::TimedOut) => {
            println!("warning: NiFi is still shutting down after the wait window");
            println!("         check `nifictl status`; a forced kill is not issued automatically");
        }
        None => {}
    }

    Ok(())
}
