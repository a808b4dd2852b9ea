//! Copy-once file transfer
//!
//! Cached asset files are written exactly once. A file already present at
//! the destination is trusted as-is (the hash record is the sole staleness
//! signal), and a missing source is skipped with a diagnostic instead of
//! failing the run, since some declared assets legitimately do not exist
//! for a given platform.

use crate::error::{OptiCacheError, OptiCacheResult};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Copy one relative asset path from the application output into the cache.
///
/// - Source missing: logged, skipped, `Ok`.
/// - Destination already present: no-op, `Ok`. Never overwrites.
/// - Otherwise: create parent directories and copy bytes. Copy failures
///   are fatal.
pub fn copy_once(app_dir: &Path, dest_root: &Path, relative_path: &str) -> OptiCacheResult<()> {
    let source = app_dir.join(relative_path);
    if !source.exists() {
        warn!(
            "Cannot locate resource {} from source directory {}. It will not be copied",
            relative_path,
            app_dir.display()
        );
        return Ok(());
    }

    let target = dest_root.join(relative_path);
    if target.exists() {
        debug!("Already cached, skipping: {}", target.display());
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OptiCacheError::io(format!("creating cache directory {}", parent.display()), e)
        })?;
    }
    fs::copy(&source, &target).map_err(|e| {
        OptiCacheError::io(
            format!("copying {} to {}", source.display(), target.display()),
            e,
        )
    })?;
    debug!("Copied {relative_path} into cache");
    Ok(())
}
