//! Clean command handler (destructive).

use std::io::{self, Write};

use nifictl_runtime::LifecycleController;

use crate::error::CliError;

/// Execute the clean command.
///
/// Confirmation lives here, outside the controller: the core refuses
/// while the daemon runs, the CLI refuses without consent.
pub fn execute(controller: &LifecycleController, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm("Empty all NiFi data repositories? This cannot be undone")? {
        println!("Aborted");
        return Ok(());
    }

    let report = controller.clean()?;

    if report.cleaned.is_empty() {
        println!("Nothing to clean");
        return Ok(());
    }
    for dir in &report.cleaned {
        println!("  emptied {}", dir.display());
    }
    println!("NiFi data cleanup complete");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
