//! List command - enumerate cached entries under a cache root

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::{OptiCacheError, OptiCacheResult};
use console::style;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// One cached entry discovered on disk
#[derive(Debug)]
struct CachedEntry {
    arch: String,
    name: String,
    version: String,
    has_record: bool,
}

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> OptiCacheResult<()> {
    let cache_root = args
        .cache_root
        .or_else(|| config.cache.root.clone())
        .ok_or(OptiCacheError::CacheRootMissing)?;

    let entries = scan_cache(&cache_root)?;

    if entries.is_empty() {
        println!("No cached entries found.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

/// Walk `<root>/<arch>/<name>/<version>` and collect entries,
/// sorted by arch, name, then semantic version.
fn scan_cache(root: &Path) -> OptiCacheResult<Vec<CachedEntry>> {
    let mut entries = Vec::new();

    for arch_dir in read_subdirs(root)? {
        let arch = dir_name(&arch_dir);
        for name_dir in read_subdirs(&arch_dir)? {
            let name = dir_name(&name_dir);
            for version_dir in read_subdirs(&name_dir)? {
                let version = dir_name(&version_dir);
                let record = version_dir.join(format!("{name}.{version}.sha512"));
                entries.push(CachedEntry {
                    arch: arch.clone(),
                    name: name.clone(),
                    version,
                    has_record: record.exists(),
                });
            }
        }
    }

    entries.sort_by(|a, b| {
        (a.arch.as_str(), a.name.as_str())
            .cmp(&(b.arch.as_str(), b.name.as_str()))
            .then_with(|| compare_versions(&a.version, &b.version))
    });
    Ok(entries)
}

/// Semantic comparison where both sides parse, lexicographic otherwise
fn compare_versions(a: &str, b: &str) -> Ordering {
    match (semver::Version::parse(a), semver::Version::parse(b)) {
        (Ok(va), Ok(vb)) => va.cmp(&vb),
        _ => a.cmp(b),
    }
}

fn read_subdirs(dir: &Path) -> OptiCacheResult<Vec<std::path::PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    let entries = fs::read_dir(dir)
        .map_err(|e| OptiCacheError::io(format!("reading cache directory {}", dir.display()), e))?;
    for entry in entries {
        let entry = entry
            .map_err(|e| OptiCacheError::io(format!("reading cache directory {}", dir.display()), e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_table(entries: &[CachedEntry]) {
    println!("{:<10} {:<35} {:<15} {}", "ARCH", "NAME", "VERSION", "STATE");
    println!("{}", "-".repeat(70));

    for entry in entries {
        let state = if entry.has_record {
            style("cached").green().to_string()
        } else {
            style("no record").yellow().to_string()
        };
        println!(
            "{:<10} {:<35} {:<15} {}",
            entry.arch, entry.name, entry.version, state
        );
    }

    println!();
    println!("Total: {} entry(ies)", entries.len());
}

fn print_json(entries: &[CachedEntry]) -> OptiCacheResult<()> {
    #[derive(serde::Serialize)]
    struct EntryJson<'a> {
        arch: &'a str,
        name: &'a str,
        version: &'a str,
        has_record: bool,
    }

    let json: Vec<EntryJson> = entries
        .iter()
        .map(|e| EntryJson {
            arch: &e.arch,
            name: &e.name,
            version: &e.version,
            has_record: e.has_record,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_plain(entries: &[CachedEntry]) {
    for entry in entries {
        println!("{}/{}/{}", entry.arch, entry.name, entry.version);
    }
}
