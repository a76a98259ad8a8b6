//! Follow command handler.

use futures_util::{StreamExt, pin_mut};
use tokio::signal;

use nifictl_core::Config;
use nifictl_core::error::LogError;
use nifictl_runtime::logs::follow;

use crate::error::CliError;

/// Execute the follow command.
///
/// Streams appended log lines until the user interrupts; Ctrl-C ends
/// the stream cooperatively rather than killing the process mid-write.
pub async fn execute(config: &Config) -> Result<(), CliError> {
    let path = config.app_log();
    println!("Following {} (Ctrl-C to stop)", path.display());

    let stream = follow(path);
    pin_mut!(stream);

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                println!();
                return Ok(());
            }
            item = stream.next() => match item {
                Some(Ok(line)) => println!("{line}"),
                Some(Err(LogError::NotFound(path))) => {
                    println!("No logs available (no file at {})", path.display());
                    return Ok(());
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
