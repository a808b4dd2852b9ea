//! AOT compiler abstraction
//!
//! The native-code generation step is an external tool invoked as a
//! subprocess. The driver only depends on this trait, so tests can swap in
//! a recording fake and the invocation mechanics stay out of the cache core.

use crate::error::{OptiCacheError, OptiCacheResult};
use crate::manifest::Library;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Abstract AOT compiler interface
#[async_trait]
pub trait NativeCompiler: Send + Sync {
    /// Generate ahead-of-time compiled output for one library.
    ///
    /// Runs against the library's primary assembly in the application
    /// output directory. A failure is fatal for the whole run.
    async fn generate(&self, lib: &Library, app_dir: &Path) -> OptiCacheResult<()>;

    /// Human-readable compiler name for display
    fn compiler_name(&self) -> String;
}

/// Compiler backed by an external crossgen executable
pub struct CrossgenCompiler {
    exe: PathBuf,
    extra_args: Vec<String>,
}

impl CrossgenCompiler {
    /// Create a compiler wrapping the given executable
    pub fn new(exe: impl Into<PathBuf>, extra_args: Vec<String>) -> Self {
        Self {
            exe: exe.into(),
            extra_args,
        }
    }
}

#[async_trait]
impl NativeCompiler for CrossgenCompiler {
    async fn generate(&self, lib: &Library, app_dir: &Path) -> OptiCacheResult<()> {
        let assembly = app_dir.join(&lib.assembly);
        info!("Generating native code for {}", lib.id());
        debug!("Executing: {} {}", self.exe.display(), assembly.display());

        let output = Command::new(&self.exe)
            .args(&self.extra_args)
            .arg(&assembly)
            .current_dir(app_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                OptiCacheError::command_failed(format!("{} {}", self.exe.display(), lib.id()), e)
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(OptiCacheError::CompilerFailed {
                library: lib.id(),
                stderr: stderr.trim().to_string(),
            })
        }
    }

    fn compiler_name(&self) -> String {
        self.exe.display().to_string()
    }
}
