//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use baccarat_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  start \n\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("start"));
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some(""));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read input line");
            None
        }
    }
}
