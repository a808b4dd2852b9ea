//! Dependency manifest parsing
//!
//! A caching pass consumes a JSON manifest produced by an external
//! dependency-resolution step. Each entry describes one resolved runtime
//! library: its declared content hash, whether it is serviceable, and the
//! asset paths (relative to the application output directory) that belong
//! to it. Libraries are read-only during a pass; nothing here is re-derived.

use crate::error::{OptiCacheError, OptiCacheResult};
use serde::Deserialize;
use std::path::Path;

/// Parsed dependency manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    /// Runtime identifier the application was resolved for (e.g. "win-x64")
    pub runtime_identifier: String,

    /// Resolved runtime libraries, in resolution order
    #[serde(default)]
    pub libraries: Vec<Library>,
}

/// One resolved runtime library
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    /// Package name, unique within a dependency set
    pub name: String,

    /// Package version
    pub version: String,

    /// Declared content hash, "{algorithm}-{value}" (opaque beyond the prefix)
    pub hash: String,

    /// Whether this library is eligible for regeneration and caching.
    /// Non-serviceable libraries are fixed platform components.
    #[serde(default)]
    pub serviceable: bool,

    /// Primary assembly path, relative to the application output directory
    pub assembly: String,

    /// Native library asset groups
    #[serde(default)]
    pub native_library_groups: Vec<AssetGroup>,

    /// Satellite resource assembly paths
    #[serde(default)]
    pub resource_assemblies: Vec<String>,

    /// Runtime assembly asset groups
    #[serde(default)]
    pub runtime_asset_groups: Vec<AssetGroup>,
}

/// A named collection of asset paths associated with one library
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroup {
    /// Runtime identifier this group applies to ("" = any)
    #[serde(default)]
    pub runtime: String,

    /// Asset paths, relative to the application output directory
    #[serde(default)]
    pub asset_paths: Vec<String>,
}

impl Library {
    /// Display identity used in diagnostics: "{name}.{version}"
    pub fn id(&self) -> String {
        format!("{}.{}", self.name, self.version)
    }
}

impl DependencyManifest {
    /// Load and parse a manifest from a JSON file on disk
    pub async fn from_file(path: &Path) -> OptiCacheResult<Self> {
        if !path.exists() {
            return Err(OptiCacheError::ManifestNotFound(path.to_path_buf()));
        }
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            OptiCacheError::io(format!("reading manifest {}", path.display()), e)
        })?;
        Self::parse(&content).map_err(|e| OptiCacheError::ManifestInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a manifest from a JSON string
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
