//! Cache directory layout
//!
//! Cache entries are keyed by (architecture, library name, library version):
//! `<root>/<arch>/<name>/<version>`. The hash record for an entry lives at
//! `<entry>/<name>.<version>.sha512`, matching package-manager hash file
//! conventions so the value can be compared against manifest hashes directly.

use std::path::{Path, PathBuf};

/// Resolves cache entry locations under a shared cache root.
///
/// Pure path composition; nothing here touches the filesystem.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
    arch: String,
}

impl CacheLayout {
    /// Create a layout for a cache root and runtime identifier.
    ///
    /// The architecture segment is the part of the runtime identifier after
    /// the last hyphen ("win-x64" -> "x64", "linux-musl-arm64" -> "arm64").
    pub fn new(root: impl Into<PathBuf>, runtime_identifier: &str) -> Self {
        let arch = runtime_identifier
            .rsplit('-')
            .next()
            .unwrap_or(runtime_identifier)
            .to_string();
        Self {
            root: root.into(),
            arch,
        }
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The architecture segment derived from the runtime identifier
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Cache entry directory for one library
    pub fn entry_dir(&self, name: &str, version: &str) -> PathBuf {
        self.root.join(&self.arch).join(name).join(version)
    }

    /// Hash record path for one library
    pub fn hash_record_path(&self, name: &str, version: &str) -> PathBuf {
        self.entry_dir(name, version)
            .join(format!("{name}.{version}.sha512"))
    }
}
