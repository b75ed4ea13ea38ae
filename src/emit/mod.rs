//! Output assembly.
//!
//! The generated symbol table is built as an ordered list of lines and
//! serialized only once the whole table exists, so a consumer never
//! observes partial output and the block order stays testable on its
//! own. Fixed order: entry point, pasting pair, tuple accessors, the
//! reducer chain (index 0 upward) bracketed by clang-format markers,
//! then `CHOICE` and `CHOOSER`.

pub mod dispatch;
pub mod stack;

use crate::config::GenerationConfig;
use crate::format::Formatter;
use crate::index::IndexCodec;
use crate::names::NameBuilder;

pub use dispatch::DispatchEmitter;
pub use stack::StackEmitter;

/// Ordered list of output lines, serialized with a trailing newline.
#[derive(Debug, Default)]
pub struct TextBlocks {
    lines: Vec<String>,
}

impl TextBlocks {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Assembles the full symbol table for `config` in the fixed block order.
pub fn assemble(config: &GenerationConfig) -> TextBlocks {
    let names = NameBuilder::new(config);
    let codec = IndexCodec::new(config.stack_depth());
    let stack = StackEmitter::new(&names, &codec, config.stack_depth());
    let dispatch = DispatchEmitter::new(&names, &codec, config.stack_depth());

    let mut blocks = TextBlocks::default();
    blocks.push(dispatch.entry());
    blocks.extend(dispatch.helpers());

    // The chain lines are column-aligned by construction; the width-sized
    // markers keep clang-format from rewrapping them.
    let marker_pad = " ".repeat(stack.block_width().saturating_sub(25));
    blocks.push(format!("#/*{marker_pad}*/ // clang-format off"));
    blocks.extend(stack.chain());
    blocks.push(format!("#/*{marker_pad}*/ // clang-format on"));

    blocks.push(dispatch.choice());
    blocks.push("#");
    blocks.push(dispatch.chooser());
    blocks
}

/// Unformatted generation: a pure function of the configuration.
pub fn generate(config: &GenerationConfig) -> String {
    assemble(config).render()
}

/// Generation with a best-effort formatting pass. The formatter may
/// decline (tool missing, failed, or deliberately pass-through), in
/// which case the raw buffer is emitted unchanged.
pub fn generate_formatted(config: &GenerationConfig, formatter: &dyn Formatter) -> String {
    let raw = generate(config);
    formatter.format(&raw).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::format::PassThrough;

    #[test]
    fn render_terminates_with_a_single_trailing_newline() {
        let config = GenerationConfig::new("NS", "R", 4, true).unwrap();
        let text = generate(&config);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn blocks_start_with_the_entry_point() {
        let config = GenerationConfig::new("NS", "R", 4, true).unwrap();
        let blocks = assemble(&config);
        assert!(blocks.lines()[0].starts_with("#define NS_DETAIL_R(reducer, initial, ...)"));
    }

    #[test]
    fn pass_through_formatting_is_the_identity() {
        let config = GenerationConfig::new("NS", "R", 4, true).unwrap();
        assert_eq!(generate_formatted(&config, &PassThrough), generate(&config));
    }

    /// Rewrites every input, standing in for a formatter run that succeeds.
    struct Rewriter;

    impl Formatter for Rewriter {
        fn format(&self, source: &str) -> Option<String> {
            Some(format!("// formatted\n{source}"))
        }
    }

    /// Always declines, standing in for a formatter run that fails.
    struct Refuser;

    impl Formatter for Refuser {
        fn format(&self, _source: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn successful_formatting_replaces_the_buffer() {
        let config = GenerationConfig::new("NS", "R", 4, true).unwrap();
        let formatted = generate_formatted(&config, &Rewriter);
        assert_eq!(formatted, format!("// formatted\n{}", generate(&config)));
    }

    #[test]
    fn declined_formatting_falls_back_to_the_raw_buffer() {
        let config = GenerationConfig::new("NS", "R", 4, true).unwrap();
        assert_eq!(generate_formatted(&config, &Refuser), generate(&config));
    }
}
