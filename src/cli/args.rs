//! Command-line arguments for the foldgen CLI.
//!
//! Arguments are positional to stay drop-in compatible with the scripts
//! that regenerate the consuming symbol tables.

use clap::Parser;

use crate::config::{DEFAULT_PREFIX, DEFAULT_STACK_DEPTH};

#[derive(Debug, Parser)]
#[command(
    name = "foldgen",
    version,
    about = "Generates a pseudo-recursive reducing macro family for the C preprocessor."
)]
pub struct FoldgenArgs {
    /// Macro namespace; prefixed to every generated macro.
    pub namespace: String,

    /// Unique prefix for the current use case.
    #[arg(default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Maximum number of arguments the generated reducer accepts.
    #[arg(default_value_t = DEFAULT_STACK_DEPTH)]
    pub stack_depth: usize,

    /// Whether the main reduce macro is detail namespaced. The literal
    /// "false" disables it; any other value enables it.
    ///
    /// The explicit `Set` action keeps clap from treating the bool field
    /// as a flag; this argument is positional and consumes a value.
    #[arg(
        default_value = "true",
        value_parser = parse_detail_flag,
        action = clap::ArgAction::Set
    )]
    pub detail: bool,

    /// Skip the clang-format pass even when the tool is installed.
    #[arg(long)]
    pub no_format: bool,
}

fn parse_detail_flag(raw: &str) -> Result<bool, std::convert::Infallible> {
    Ok(raw != "false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_flag_is_false_only_for_the_literal_string() {
        assert_eq!(parse_detail_flag("false"), Ok(false));
        assert_eq!(parse_detail_flag("true"), Ok(true));
        assert_eq!(parse_detail_flag("no"), Ok(true));
        assert_eq!(parse_detail_flag(""), Ok(true));
    }

    #[test]
    fn defaults_fill_every_optional_argument() {
        let args = FoldgenArgs::parse_from(["foldgen", "PPUTL"]);
        assert_eq!(args.prefix, "REDUCE");
        assert_eq!(args.stack_depth, 256);
        assert!(args.detail);
        assert!(!args.no_format);
    }

    #[test]
    fn detail_positional_consumes_a_value() {
        let args = FoldgenArgs::parse_from(["foldgen", "PPUTL", "REDUCE", "8", "false"]);
        assert!(!args.detail);

        let args = FoldgenArgs::parse_from(["foldgen", "PPUTL", "REDUCE", "8", "true"]);
        assert!(args.detail);

        let args = FoldgenArgs::parse_from(["foldgen", "PPUTL", "REDUCE", "8", "yes"]);
        assert!(args.detail);
    }

    #[test]
    fn argument_definition_passes_claps_invariant_checks() {
        use clap::CommandFactory;
        FoldgenArgs::command().debug_assert();
    }
}
