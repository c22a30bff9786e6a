//! Output helpers for CLI operations.

use std::io::{self, Write};

use werent::AppError;

/// Writes one line to stdout.
pub fn write_line(line: &str) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    write_line_to(&mut stdout, line)
}

/// Writes one line to the given writer.
pub fn write_line_to<W: Write>(writer: &mut W, line: &str) -> Result<(), AppError> {
    writeln!(writer, "{line}").map_err(|error| AppError::Io {
        message: error.to_string(),
    })
}
