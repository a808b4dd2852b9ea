//! CLI command implementations

pub mod config;
pub mod list;
pub mod locate;
pub mod run;

pub use config::execute as config;
pub use list::execute as list;
pub use locate::execute as locate;
pub use run::execute as run;
