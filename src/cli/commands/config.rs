//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{OptiCacheError, OptiCacheResult};
use console::style;

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager) -> OptiCacheResult<()> {
    match args.action {
        ConfigAction::Show => show(manager).await,
        ConfigAction::Path => {
            println!("{}", manager.config_path().display());
            Ok(())
        }
        ConfigAction::Init { force } => init(manager, force).await,
    }
}

async fn show(manager: &ConfigManager) -> OptiCacheResult<()> {
    let config = manager.load().await?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

async fn init(manager: &ConfigManager, force: bool) -> OptiCacheResult<()> {
    if manager.config_path().exists() && !force {
        return Err(OptiCacheError::User(format!(
            "Configuration already exists at {}. Use --force to overwrite",
            manager.config_path().display()
        )));
    }

    manager.save(&Config::default()).await?;
    println!(
        "{} configuration written to {}",
        style("Created:").green().bold(),
        manager.config_path().display()
    );
    Ok(())
}
