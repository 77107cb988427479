//! UI helper functions for terminal output formatting.
//!
//! Errors go to the error stream so that session output on
//! stdout stays readable when piped.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Print a blank-line separated section header, e.g. `--- Welcome ---`.
pub fn write_banner(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title)?;
    writeln!(out)
}
