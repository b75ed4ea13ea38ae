//! User-facing output for the CLI.
//!
//! Generated text goes to stdout untouched so it can be piped straight
//! into the consuming symbol table. Diagnostics go to stderr, with a
//! colored header when stderr is a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::FoldgenError;

/// Writes the generated buffer to stdout. The buffer already carries
/// its trailing newline.
pub fn emit_generated(text: &str) {
    print!("{text}");
}

/// Reports a configuration error on stderr via miette's fancy renderer.
pub fn report_error(error: FoldgenError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error");
    let _ = stderr.reset();
    let _ = writeln!(stderr, ": {:?}", miette::Report::new(error));
}
