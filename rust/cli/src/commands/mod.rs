//! Command handler modules for the baccarat CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and input
//!   (`&mut dyn BufRead`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod cfg;
pub mod counts;
pub mod deal;
pub mod play;

pub use cfg::handle_cfg_command;
pub use counts::handle_counts_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
