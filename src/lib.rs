//! opticache - Shared Optimization Cache
//!
//! Manages whether and how the outputs of an external AOT compiler land
//! in a shared, deduplicated, architecture- and version-keyed cache.

pub mod cache;
pub mod cli;
pub mod compile;
pub mod config;
pub mod error;
pub mod manifest;

pub use error::{OptiCacheError, OptiCacheResult};
