//! Run command - drive a full caching pass

use crate::cache::CacheLayout;
use crate::cli::args::RunArgs;
use crate::compile::{self, CrossgenCompiler, NativeCompiler};
use crate::config::Config;
use crate::error::{OptiCacheError, OptiCacheResult};
use crate::manifest::DependencyManifest;
use console::style;
use tracing::debug;

/// Execute the run command
pub async fn execute(args: RunArgs, config: &Config) -> OptiCacheResult<()> {
    let manifest = DependencyManifest::from_file(&args.manifest).await?;
    debug!(
        "Loaded manifest: {} libraries, rid {}",
        manifest.libraries.len(),
        manifest.runtime_identifier
    );

    let app_dir = match args.app_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| OptiCacheError::io("getting current directory", e))?,
    };

    let cache_root = args
        .cache_root
        .or_else(|| config.cache.root.clone())
        .ok_or(OptiCacheError::CacheRootMissing)?;

    let overwrite = args.overwrite || config.cache.overwrite_on_conflict;
    let layout = CacheLayout::new(cache_root, &manifest.runtime_identifier);

    // Plan phase: all libraries are checked before anything runs
    let plans = compile::plan(&manifest.libraries, &layout, overwrite)?;

    if args.dry_run {
        print_plan(&manifest, &plans);
        return Ok(());
    }

    let compiler = args
        .compiler
        .or_else(|| config.compiler.path.clone())
        .map(|exe| CrossgenCompiler::new(exe, config.compiler.args.clone()));

    let summary = compile::execute(
        &manifest.libraries,
        &plans,
        compiler.as_ref().map(|c| c as &dyn NativeCompiler),
        &app_dir,
        &layout,
    )
    .await?;

    println!(
        "{} {} generated, {} hash records written, {} up to date",
        style("Done:").green().bold(),
        summary.generated,
        summary.refreshed,
        summary.up_to_date
    );
    Ok(())
}

/// Print the per-library plan without touching the cache
fn print_plan(manifest: &DependencyManifest, plans: &[compile::LibraryPlan]) {
    println!("{:<45} {:<10} {}", "LIBRARY", "GENERATE", "HASH RECORD");
    println!("{}", "-".repeat(70));

    for (lib, plan) in manifest.libraries.iter().zip(plans) {
        let generate = if plan.needs_generation {
            style("yes").yellow().to_string()
        } else {
            style("no").dim().to_string()
        };
        let record = match plan.pending_hash {
            Some(_) => "write",
            None => "up to date",
        };
        println!("{:<45} {:<10} {}", lib.id(), generate, record);
    }

    println!();
    println!("Total: {} library(ies), nothing modified", plans.len());
}
