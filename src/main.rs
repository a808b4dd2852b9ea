//! opticache - Shared Optimization Cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use opticache::cli::{Cli, Commands};
use opticache::config::ConfigManager;
use opticache::error::OptiCacheResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> OptiCacheResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("opticache=warn"),
        1 => EnvFilter::new("opticache=info"),
        _ => EnvFilter::new("opticache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    // Config command operates on the manager itself
    if let Commands::Config(args) = cli.command {
        return opticache::cli::commands::config(args, &config_manager).await;
    }

    let config = config_manager.load().await?;

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Run(args) => opticache::cli::commands::run(args, &config).await,
        Commands::Locate(args) => opticache::cli::commands::locate(args, &config).await,
        Commands::List(args) => opticache::cli::commands::list(args, &config).await,
    }
}
