//! Optional output formatting.
//!
//! Formatting is strictly best-effort: a formatter may decline for any
//! reason and generation carries on with the raw buffer. Tests use
//! `PassThrough` so results never depend on tools installed on the host.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

/// A pluggable formatting capability.
pub trait Formatter {
    /// Reformats `source`, or returns `None` to decline. Declining is
    /// not an error; the caller falls back to `source` unchanged.
    fn format(&self, source: &str) -> Option<String>;
}

/// Always declines. The deterministic default.
pub struct PassThrough;

impl Formatter for PassThrough {
    fn format(&self, _source: &str) -> Option<String> {
        None
    }
}

/// Runs the external `clang-format` binary over a temporary file.
///
/// The temp file is the hand-off medium and is removed on every exit
/// path, including formatter failure, when the `NamedTempFile` drops.
pub struct ClangFormatter;

impl Formatter for ClangFormatter {
    fn format(&self, source: &str) -> Option<String> {
        let mut file = NamedTempFile::new().ok()?;
        file.write_all(source.as_bytes()).ok()?;
        file.flush().ok()?;

        let output = Command::new("clang-format").arg(file.path()).output().ok()?;
        if !output.status.success() {
            return None;
        }
        // clang-format reports recoverable problems on stderr while still
        // exiting 0; treat any stderr chatter as a failed run.
        if !String::from_utf8_lossy(&output.stderr).trim().is_empty() {
            return None;
        }

        let stdout = String::from_utf8(output.stdout).ok()?;
        let mut formatted = stdout.trim().to_string();
        formatted.push('\n');
        Some(formatted)
    }
}
