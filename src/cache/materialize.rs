//! Cache entry materialization
//!
//! Runs once per library after its generation step (if any) completes:
//! writes the pending hash record, then copies every declared asset into
//! the entry directory. The hash record write is fatal on I/O error; asset
//! copies follow copy-once semantics.

use crate::cache::layout::CacheLayout;
use crate::cache::transfer::copy_once;
use crate::error::{OptiCacheError, OptiCacheResult};
use crate::manifest::Library;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write the hash record (if one is pending) and copy declared assets
/// for one library into its cache entry.
pub fn materialize(
    app_dir: &Path,
    layout: &CacheLayout,
    lib: &Library,
    pending_hash: Option<&str>,
) -> OptiCacheResult<()> {
    if let Some(value) = pending_hash {
        write_hash_record(layout, lib, value)?;
    }

    let entry_dir = layout.entry_dir(&lib.name, &lib.version);

    copy_once(app_dir, &entry_dir, &lib.assembly)?;

    for group in &lib.native_library_groups {
        for path in &group.asset_paths {
            copy_once(app_dir, &entry_dir, path)?;
        }
    }

    for path in &lib.resource_assemblies {
        copy_once(app_dir, &entry_dir, path)?;
    }

    for group in &lib.runtime_asset_groups {
        for path in &group.asset_paths {
            copy_once(app_dir, &entry_dir, path)?;
        }
    }

    Ok(())
}

/// Write the hash value as the full contents of the entry's record file,
/// creating the entry directory as needed.
fn write_hash_record(layout: &CacheLayout, lib: &Library, value: &str) -> OptiCacheResult<()> {
    let record_path = layout.hash_record_path(&lib.name, &lib.version);
    if let Some(parent) = record_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OptiCacheError::io(
                format!("creating cache entry directory {}", parent.display()),
                e,
            )
        })?;
    }
    fs::write(&record_path, value).map_err(|e| {
        OptiCacheError::io(
            format!("writing hash record {}", record_path.display()),
            e,
        )
    })?;
    debug!("Wrote hash record for {}", lib.id());
    Ok(())
}
