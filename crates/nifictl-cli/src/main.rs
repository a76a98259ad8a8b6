//! CLI entry point - the composition root.
//!
//! This is the only place where the runtime adapters are wired together.
//! Command dispatch routes to handlers which delegate to the
//! `LifecycleController`.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nifictl_cli::{Cli, CliError, Commands, handlers};
use nifictl_core::Config;
use nifictl_runtime::{HttpHealthProbe, LifecycleController, ScriptLauncher, SystemInspector};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose wins over RUST_LOG's absence
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        return Ok(());
    };

    let mut config = Config::resolve(cli.nifi_home.as_deref())?;
    tracing::debug!("resolved NiFi home: {}", config.home.display());

    // Per-invocation timeout overrides are applied before the value is
    // frozen and shared
    if let Commands::Start { timeout, .. } = &command {
        config.start_timeout = Duration::from_secs(*timeout);
    }
    if let Commands::Stop { timeout } = &command {
        config.stop_timeout = Duration::from_secs(*timeout);
    }

    let config = Arc::new(config);
    let controller = build_controller(&config)?;

    match command {
        Commands::Start { no_wait, .. } => handlers::start::execute(&controller, no_wait).await,
        Commands::Stop { .. } => handlers::stop::execute(&controller).await,
        Commands::Restart => handlers::restart::execute(&controller).await,
        Commands::Status { json } => handlers::status::execute(&controller, json).await,
        Commands::Logs { lines } => handlers::logs::execute(&config, lines),
        Commands::Follow => handlers::follow::execute(&config).await,
        Commands::Clean { yes } => handlers::clean::execute(&controller, yes),
        Commands::Info => handlers::info::execute(&config),
    }
}

fn build_controller(config: &Arc<Config>) -> Result<LifecycleController, CliError> {
    let launcher = Arc::new(ScriptLauncher::new(
        config.launcher_script(),
        config.home.clone(),
        config.command_timeout,
    ));
    let probe = Arc::new(HttpHealthProbe::new(
        config.diagnostics_url(),
        config.probe_timeout,
    )?);
    let inspector = Arc::new(SystemInspector::new(config.pid_file()));

    Ok(LifecycleController::new(
        config.clone(),
        launcher,
        probe,
        inspector,
    ))
}
