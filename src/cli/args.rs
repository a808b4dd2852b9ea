//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// opticache - Shared optimization cache for AOT-compiled library artifacts
///
/// Decides which resolved runtime libraries need native-code regeneration,
/// writes generated artifacts into a shared version- and architecture-keyed
/// cache, and guards cached content with hash records.
#[derive(Parser, Debug)]
#[command(name = "opticache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "OPTICACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a caching pass over a dependency manifest
    Run(RunArgs),

    /// Print the cache entry location for one library
    Locate(LocateArgs),

    /// List cached entries under a cache root
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Dependency manifest (JSON) describing the resolved libraries
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Application build output directory (defaults to current directory)
    #[arg(short, long)]
    pub app_dir: Option<PathBuf>,

    /// Cache root directory (overrides config)
    #[arg(long)]
    pub cache_root: Option<PathBuf>,

    /// AOT compiler executable (overrides config)
    #[arg(long)]
    pub compiler: Option<PathBuf>,

    /// Replace conflicting hash records instead of aborting
    #[arg(long)]
    pub overwrite: bool,

    /// Plan only: print per-library decisions, mutate nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct LocateArgs {
    /// Library name
    pub name: String,

    /// Library version
    pub version: String,

    /// Runtime identifier (e.g. win-x64); the arch segment keys the cache
    #[arg(long)]
    pub rid: String,

    /// Cache root directory (overrides config)
    #[arg(long)]
    pub cache_root: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Cache root directory (overrides config)
    #[arg(long)]
    pub cache_root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
