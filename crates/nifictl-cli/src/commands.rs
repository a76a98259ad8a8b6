//! Subcommand definitions for the `nifictl` binary.

use clap::Subcommand;

/// All operations exposed by the lifecycle controller.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the NiFi instance
    Start {
        /// Do not wait for the API to become ready
        #[arg(long = "no-wait")]
        no_wait: bool,

        /// Seconds to wait for readiness
        #[arg(long, default_value_t = 120)]
        timeout: u64,
    },

    /// Stop the NiFi instance
    Stop {
        /// Seconds to wait for the process to exit
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },

    /// Restart the NiFi instance
    Restart,

    /// Show the current service state
    Status {
        /// Output status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the last lines of the application log
    Logs {
        /// Number of lines to show
        #[arg(short = 'n', long = "lines", default_value_t = 50)]
        lines: usize,
    },

    /// Follow the application log until interrupted
    Follow,

    /// Empty the data repositories (DESTRUCTIVE; requires NiFi stopped)
    Clean {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Show resolved installation paths and whether they exist
    Info,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn start_flags_parse() {
        let cli = Cli::parse_from(["nifictl", "start", "--no-wait", "--timeout", "30"]);
        match cli.command {
            Some(Commands::Start { no_wait, timeout }) => {
                assert!(no_wait);
                assert_eq!(timeout, 30);
            }
            _ => panic!("expected start"),
        }
    }

    #[test]
    fn logs_defaults_to_fifty_lines() {
        let cli = Cli::parse_from(["nifictl", "logs"]);
        match cli.command {
            Some(Commands::Logs { lines }) => assert_eq!(lines, 50),
            _ => panic!("expected logs"),
        }
    }

    #[test]
    fn clean_accepts_yes_shorthand() {
        let cli = Cli::parse_from(["nifictl", "clean", "-y"]);
        assert!(matches!(cli.command, Some(Commands::Clean { yes: true })));
    }
}
