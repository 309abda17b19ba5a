//! Command implementations for the tinter CLI.

mod apply;
mod init;
mod palette;
mod solve;

// Re-export all command functions
pub use apply::cmd_apply;
pub use init::cmd_init;
pub use palette::cmd_palette;
pub use solve::cmd_solve;
