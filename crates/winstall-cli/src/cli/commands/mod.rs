//! CLI command handlers.

mod checksum;
mod install;

pub use checksum::run_checksum;
pub use install::run_install;
