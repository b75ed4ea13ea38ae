//! Unified error handling for foldgen.
//!
//! Every operator-facing failure is a `FoldgenError`, rendered through
//! `miette` so diagnostics carry a stable code and a help message.
//! Formatter failures are deliberately absent from this enum: formatting
//! is best-effort and falls back to the unformatted buffer instead of
//! erroring (see `crate::format`).

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FoldgenError {
    /// An empty namespace would be filtered out of every generated symbol,
    /// so independently generated macro families could collide.
    #[error("namespace must be a non-empty token")]
    #[diagnostic(
        code(foldgen::config::empty_namespace),
        help("pass the macro namespace as the first argument, e.g. `foldgen PPUTL`")
    )]
    EmptyNamespace,

    /// The reducer chain needs at least the index-0 base case.
    #[error("stack depth must be at least 1, got {0}")]
    #[diagnostic(
        code(foldgen::config::zero_stack_depth),
        help("the stack depth is the maximum number of reducible arguments; 256 is the default")
    )]
    ZeroStackDepth(usize),
}
