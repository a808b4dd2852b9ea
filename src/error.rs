//! Error types for opticache
//!
//! All modules use `OptiCacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for opticache operations
pub type OptiCacheResult<T> = Result<T, OptiCacheError>;

/// All errors that can occur in opticache
#[derive(Error, Debug)]
pub enum OptiCacheError {
    // Integrity errors
    #[error("Unsupported hash value for package {name}.{version}, value: {hash}")]
    UnsupportedHash {
        name: String,
        version: String,
        hash: String,
    },

    #[error("Hash mismatch found for {name}.{version}: manifest declares {declared}, cache holds {existing}")]
    HashConflict {
        name: String,
        version: String,
        declared: String,
        existing: String,
    },

    // Manifest errors
    #[error("Dependency manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Invalid dependency manifest at {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    // Compiler errors
    #[error("No AOT compiler configured but {0} libraries need generation")]
    CompilerNotConfigured(usize),

    #[error("Compiler failed for {library}: {stderr}")]
    CompilerFailed { library: String, stderr: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No cache root configured. Pass --cache-root or set cache.root in the config")]
    CacheRootMissing,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl OptiCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::HashConflict { .. } => {
                Some("Re-run with --overwrite to replace the cached hash record")
            }
            Self::CompilerNotConfigured(_) => {
                Some("Pass --compiler or set compiler.path in the config")
            }
            Self::CacheRootMissing => Some("Pass --cache-root or run: opticache config init"),
            _ => None,
        }
    }
}
