//! Generation gating and compiler invocation

pub mod compiler;
pub mod driver;

pub use compiler::{CrossgenCompiler, NativeCompiler};
pub use driver::{execute, plan, LibraryPlan, PassSummary};
