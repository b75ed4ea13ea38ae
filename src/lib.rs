//! foldgen: generates a pseudo-recursive reducing macro family for the
//! C preprocessor.
//!
//! The preprocessor terminates recursive expansion, so a reducing macro
//! cannot be chained through itself. foldgen instead emits a closed,
//! depth-indexed family of definitions: one reducer entry per possible
//! argument count up to a configured stack depth, plus the dispatch
//! machinery that routes a use-site call to the correctly-indexed entry
//! based on how many arguments were actually supplied.

pub use crate::config::GenerationConfig;
pub use crate::errors::FoldgenError;
pub use crate::format::{ClangFormatter, Formatter, PassThrough};

pub mod cli;
pub mod config;
pub mod emit;
pub mod errors;
pub mod format;
pub mod index;
pub mod names;
