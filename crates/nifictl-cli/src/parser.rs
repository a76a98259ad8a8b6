//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for controlling a local Apache NiFi instance.
#[derive(Parser)]
#[command(name = "nifictl")]
#[command(about = "Start, stop, and inspect a local Apache NiFi instance")]
#[command(version)]
pub struct Cli {
    /// Override the NiFi installation root for this invocation
    #[arg(long = "nifi-home", global = true)]
    pub nifi_home: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from(["nifictl", "--verbose", "--nifi-home", "/opt/nifi", "status"]);
        assert!(cli.verbose);
        assert_eq!(cli.nifi_home, Some(PathBuf::from("/opt/nifi")));
    }
}
