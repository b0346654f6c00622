use std::io;
use std::io::Write;

use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;

/// Number of braille characters that fit on one line of the terminal, if there is one.
pub fn columns() -> Option<usize> {
    match terminal::size() {
        Ok((cols, _rows)) => Some(cols as usize),
        Err(e) => {
            debug!("no terminal size available: {e}");
            None
        }
    }
}

/// Writes a rendered preview to `out`.
pub fn print_preview<W: Write>(out: &mut W, preview: &str) -> io::Result<()> {
    execute!(out, style::Print(preview))
}
