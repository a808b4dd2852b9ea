//! Locate command - print cache entry paths for one library

use crate::cache::CacheLayout;
use crate::cli::args::LocateArgs;
use crate::config::Config;
use crate::error::{OptiCacheError, OptiCacheResult};
use console::style;

/// Execute the locate command
pub async fn execute(args: LocateArgs, config: &Config) -> OptiCacheResult<()> {
    let cache_root = args
        .cache_root
        .or_else(|| config.cache.root.clone())
        .ok_or(OptiCacheError::CacheRootMissing)?;

    let layout = CacheLayout::new(cache_root, &args.rid);
    let entry = layout.entry_dir(&args.name, &args.version);
    let record = layout.hash_record_path(&args.name, &args.version);

    let state = if record.exists() {
        style("cached").green().to_string()
    } else {
        style("absent").dim().to_string()
    };

    println!("entry:       {}", entry.display());
    println!("hash record: {}", record.display());
    println!("state:       {state}");
    Ok(())
}
