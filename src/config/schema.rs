//! Configuration schema for opticache
//!
//! Configuration is stored at `~/.config/opticache/config.toml`.
//! CLI flags override any value set here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache settings
    pub cache: CacheConfig,

    /// AOT compiler settings
    pub compiler: CompilerConfig,
}

/// Shared cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root directory
    pub root: Option<PathBuf>,

    /// Replace conflicting hash records instead of aborting.
    /// Risks cache misses for other applications sharing the cache.
    pub overwrite_on_conflict: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: None,
            overwrite_on_conflict: false,
        }
    }
}

/// External compiler settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Path to the crossgen executable
    pub path: Option<PathBuf>,

    /// Extra arguments passed before the assembly path
    pub args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            path: None,
            args: Vec::new(),
        }
    }
}
