//! Shared helpers for the integration tests.
//!
//! - `cli_runner`: runs the built `baccarat` binary with arguments, stdin and
//!   environment, capturing exit code, stdout and stderr.
//! - `temp_files`: scratch directory for config files, removed on drop.
pub mod cli_runner;
pub mod temp_files;
