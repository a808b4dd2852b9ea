//! Caching pass driver
//!
//! A pass runs in two phases. The plan phase checks every library's hash
//! record up front and produces one decision per library, so a conflict or
//! unsupported hash aborts the run before any generation work or cache
//! mutation happens. The apply phase then generates serviceable libraries
//! and materializes each entry.
//!
//! The pending-hash decision is deliberately decoupled from the generation
//! trigger: a non-serviceable library with a stale record gets its record
//! refreshed without being regenerated. The record therefore tracks
//! manifest provenance, not asset freshness.

use crate::cache::{self, CacheLayout, HashDecision};
use crate::compile::compiler::NativeCompiler;
use crate::error::{OptiCacheError, OptiCacheResult};
use crate::manifest::Library;
use std::path::Path;
use tracing::{debug, info};

/// Per-library decision produced by the plan phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPlan {
    /// Hash value to persist once this library's apply step runs.
    /// `None` means the existing record already matches.
    pub pending_hash: Option<String>,

    /// Whether the external compiler must run for this library.
    /// Only serviceable libraries are ever regenerated.
    pub needs_generation: bool,
}

/// Counts reported after a completed pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Libraries the compiler ran for
    pub generated: usize,

    /// Hash records written (fresh or overwritten)
    pub refreshed: usize,

    /// Libraries whose record already matched
    pub up_to_date: usize,
}

/// Plan phase: check every library before any work starts.
///
/// Fails fast on the first unsupported hash or conflict, leaving the
/// cache untouched for the entire batch.
pub fn plan(
    libraries: &[Library],
    layout: &CacheLayout,
    overwrite_on_conflict: bool,
) -> OptiCacheResult<Vec<LibraryPlan>> {
    let mut plans = Vec::with_capacity(libraries.len());

    for lib in libraries {
        let decision = cache::check(lib, layout, overwrite_on_conflict)?;
        let pending_hash = match decision {
            HashDecision::UpToDate => None,
            HashDecision::WriteNeeded(value) => Some(value),
        };
        debug!(
            "Planned {}: pending_hash={}, generate={}",
            lib.id(),
            pending_hash.is_some(),
            lib.serviceable
        );
        plans.push(LibraryPlan {
            pending_hash,
            needs_generation: lib.serviceable,
        });
    }

    Ok(plans)
}

/// Apply phase: generate and materialize each library in order.
///
/// `compiler` may be `None` only when no library in the plan needs
/// generation. Entries completed before a failure are kept; there is no
/// cross-library rollback.
pub async fn execute(
    libraries: &[Library],
    plans: &[LibraryPlan],
    compiler: Option<&dyn NativeCompiler>,
    app_dir: &Path,
    layout: &CacheLayout,
) -> OptiCacheResult<PassSummary> {
    let to_generate = plans.iter().filter(|p| p.needs_generation).count();
    if to_generate > 0 && compiler.is_none() {
        return Err(OptiCacheError::CompilerNotConfigured(to_generate));
    }

    let mut summary = PassSummary::default();

    for (lib, plan) in libraries.iter().zip(plans) {
        if plan.needs_generation {
            if let Some(compiler) = compiler {
                compiler.generate(lib, app_dir).await?;
                summary.generated += 1;
            }
        }

        cache::materialize(app_dir, layout, lib, plan.pending_hash.as_deref())?;

        match plan.pending_hash {
            Some(_) => summary.refreshed += 1,
            None => summary.up_to_date += 1,
        }
        info!("Cached {}", lib.id());
    }

    Ok(summary)
}
