//! The foldgen command-line interface.
//!
//! Resolves configuration from the positional arguments, runs one
//! generation pass, and writes the complete buffer to stdout. On a
//! configuration error nothing is emitted and the process exits 1.

use clap::Parser;
use std::process;

use crate::cli::args::FoldgenArgs;
use crate::config::GenerationConfig;
use crate::emit;
use crate::errors::FoldgenError;
use crate::format::{ClangFormatter, Formatter, PassThrough};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = FoldgenArgs::parse();
    match generate_from_args(&args) {
        Ok(text) => output::emit_generated(&text),
        Err(error) => {
            output::report_error(error);
            process::exit(1);
        }
    }
}

fn generate_from_args(args: &FoldgenArgs) -> Result<String, FoldgenError> {
    let config = GenerationConfig::new(
        args.namespace.clone(),
        args.prefix.clone(),
        args.stack_depth,
        args.detail,
    )?;
    let formatter: &dyn Formatter = if args.no_format {
        &PassThrough
    } else {
        &ClangFormatter
    };
    Ok(emit::generate_formatted(&config, formatter))
}
