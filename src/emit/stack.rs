//! The depth-indexed reducer chain.
//!
//! The preprocessor refuses to expand a macro inside its own expansion,
//! so the fold cannot be written as one self-referential definition. It
//! is statically unrolled instead: one definition per index in
//! `[0, stack_depth)`, each textually invoking the definition one index
//! below it. The chain is closed at generation time; expanding the entry
//! for index `n` consumes exactly `n` values.

use crate::index::IndexCodec;
use crate::names::{NameBuilder, Symbol};

pub struct StackEmitter<'a> {
    names: &'a NameBuilder,
    codec: &'a IndexCodec,
    stack_depth: usize,
}

impl<'a> StackEmitter<'a> {
    pub fn new(names: &'a NameBuilder, codec: &'a IndexCodec, stack_depth: usize) -> Self {
        Self {
            names,
            codec,
            stack_depth,
        }
    }

    /// Name of the chain entry for index `i`.
    pub fn entry_name(&self, i: usize) -> Symbol {
        self.names.detail_name(&self.codec.hex(i))
    }

    /// One `#define` line for index `i`.
    ///
    /// Index 0 is the fold identity: it discards the reducer and
    /// iteration state and yields the accumulator. Index 1 applies the
    /// reducer once and terminates. Higher indices apply the reducer to
    /// the head value, peel the head off the iteration-state tuple, and
    /// hand the rest to the entry one index below.
    pub fn definition(&self, i: usize) -> String {
        let first = self.names.detail_name("FIRST");
        match i {
            0 => format!("#define {}(r, a, is)         a", self.entry_name(0)),
            1 => format!(
                "#define {}(r, a, is, v)      r(a, v, {} is)",
                self.entry_name(1),
                first
            ),
            _ => format!(
                "#define {}(r, a, is, v, ...) {}(r, r(a, v, {} is), ({} is), __VA_ARGS__)",
                self.entry_name(i),
                self.entry_name(i - 1),
                first,
                self.names.detail_name("REST")
            ),
        }
    }

    /// All chain definitions, index 0 upward.
    pub fn chain(&self) -> Vec<String> {
        (0..self.stack_depth).map(|i| self.definition(i)).collect()
    }

    /// Length of the final (longest) chain line, used to size the
    /// clang-format block markers around the chain.
    pub fn block_width(&self) -> usize {
        self.definition(self.stack_depth - 1).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    fn emitter_parts(depth: usize) -> (NameBuilder, IndexCodec) {
        let config = GenerationConfig::new("NS", "R", depth, true).unwrap();
        (NameBuilder::new(&config), IndexCodec::new(depth))
    }

    #[test]
    fn base_case_returns_the_accumulator() {
        let (names, codec) = emitter_parts(4);
        let emitter = StackEmitter::new(&names, &codec, 4);
        assert_eq!(emitter.definition(0), "#define NS_DETAIL_R_0(r, a, is)         a");
    }

    #[test]
    fn single_value_case_applies_the_reducer_once() {
        let (names, codec) = emitter_parts(4);
        let emitter = StackEmitter::new(&names, &codec, 4);
        assert_eq!(
            emitter.definition(1),
            "#define NS_DETAIL_R_1(r, a, is, v)      r(a, v, NS_DETAIL_R_FIRST is)"
        );
    }

    #[test]
    fn higher_indices_chain_to_the_previous_entry() {
        let (names, codec) = emitter_parts(4);
        let emitter = StackEmitter::new(&names, &codec, 4);
        assert_eq!(
            emitter.definition(3),
            "#define NS_DETAIL_R_3(r, a, is, v, ...) \
             NS_DETAIL_R_2(r, r(a, v, NS_DETAIL_R_FIRST is), (NS_DETAIL_R_REST is), __VA_ARGS__)"
        );
    }

    #[test]
    fn chain_has_one_entry_per_index() {
        let (names, codec) = emitter_parts(7);
        let emitter = StackEmitter::new(&names, &codec, 7);
        assert_eq!(emitter.chain().len(), 7);
    }
}
