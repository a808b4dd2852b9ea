//! Shared optimization cache
//!
//! On-disk layout, hash-record integrity checks, and the copy-once
//! materialization of generated artifacts into cache entries.

pub mod integrity;
pub mod layout;
pub mod materialize;
pub mod transfer;

pub use integrity::{check, HashDecision};
pub use layout::CacheLayout;
pub use materialize::materialize;
pub use transfer::copy_once;
