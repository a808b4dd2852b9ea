//! Hash record verification
//!
//! Each cache entry persists the library's declared content hash as a plain
//! text record. Before any generation work starts, every library is checked
//! against its record so a conflicting or malformed hash aborts the whole
//! run without mutating the cache.

use crate::cache::layout::CacheLayout;
use crate::error::{OptiCacheError, OptiCacheResult};
use crate::manifest::Library;
use std::fs;
use tracing::{debug, warn};

/// The only hash algorithm prefix this cache understands.
/// The value after the prefix is handled as an opaque string.
const SHA512_PREFIX: &str = "sha512";

/// Outcome of checking one library against its persisted hash record.
///
/// Unsupported-algorithm and conflict-with-overwrite-disabled are not
/// outcomes; they are fatal errors surfaced through the `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashDecision {
    /// The record on disk equals the declared value; nothing to write
    UpToDate,

    /// No record exists, or a differing record may be replaced; the
    /// carried value must be written once generation completes
    WriteNeeded(String),
}

/// Check a library's declared hash against the cache-side record.
///
/// Reads at most one file; never writes. With `overwrite_on_conflict` a
/// differing record downgrades from a fatal conflict to a warned overwrite.
pub fn check(
    lib: &Library,
    layout: &CacheLayout,
    overwrite_on_conflict: bool,
) -> OptiCacheResult<HashDecision> {
    let declared = lib
        .hash
        .strip_prefix(SHA512_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| OptiCacheError::UnsupportedHash {
            name: lib.name.clone(),
            version: lib.version.clone(),
            hash: lib.hash.clone(),
        })?;

    let record_path = layout.hash_record_path(&lib.name, &lib.version);
    if !record_path.exists() {
        debug!("No hash record for {}, write needed", lib.id());
        return Ok(HashDecision::WriteNeeded(declared.to_string()));
    }

    let existing = fs::read_to_string(&record_path).map_err(|e| {
        OptiCacheError::io(
            format!("reading hash record {}", record_path.display()),
            e,
        )
    })?;

    if existing == declared {
        return Ok(HashDecision::UpToDate);
    }

    if overwrite_on_conflict {
        warn!(
            "Hash mismatch for {}. Overwriting existing hash record; this may cause \
             cache misses for other applications sharing this cache",
            lib.id()
        );
        return Ok(HashDecision::WriteNeeded(declared.to_string()));
    }

    Err(OptiCacheError::HashConflict {
        name: lib.name.clone(),
        version: lib.version.clone(),
        declared: declared.to_string(),
        existing,
    })
}
