//! Argument-count dispatch for the generated entry point.
//!
//! The preprocessor has no conditionals over argument counts, so the
//! entry point counts in reverse: `CHOOSER` appends the full descending
//! probe sequence after the caller's actual arguments, and `CHOICE`
//! declares `stack_depth - 1` ignored leading parameters followed by
//! `size`. With `N` caller arguments in front, the probe label that
//! lands on `size` is exactly the hex encoding of `N`. `CHOICE` then
//! pastes that label onto the detail prefix to select the chain entry
//! for index `N`. Pasting goes through the two-stage `CAT`/`CAT_X`
//! indirection so the substituted label is re-scanned before `##`.

use crate::index::IndexCodec;
use crate::names::NameBuilder;

pub struct DispatchEmitter<'a> {
    names: &'a NameBuilder,
    codec: &'a IndexCodec,
    stack_depth: usize,
}

impl<'a> DispatchEmitter<'a> {
    pub fn new(names: &'a NameBuilder, codec: &'a IndexCodec, stack_depth: usize) -> Self {
        Self {
            names,
            codec,
            stack_depth,
        }
    }

    /// The entry-point define. Seeds the iteration-state tuple with
    /// `0 .. stack_depth-1`, so the reducer sees a 0-based step counter
    /// as its context value.
    pub fn entry(&self) -> String {
        format!(
            "#define {}(reducer, initial, ...) {}(__VA_ARGS__) (reducer, initial, ({}) __VA_OPT__(, ) __VA_ARGS__)",
            self.names.public_name(""),
            self.names.detail_name("CHOOSER"),
            self.iterator_seed()
        )
    }

    /// `0, 1, .., stack_depth-1` in decimal.
    fn iterator_seed(&self) -> String {
        (0..self.stack_depth)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The pasting pair and the iteration-state tuple accessors,
    /// separated by bare `#` lines as in the consuming symbol table.
    pub fn helpers(&self) -> Vec<String> {
        let cat_x = self.names.detail_name("CAT_X");
        vec![
            "#".to_string(),
            format!("#define {}(a, b) a##b", cat_x),
            format!("#define {}(a, b)   {}(a, b)", self.names.detail_name("CAT"), cat_x),
            "#".to_string(),
            format!("#define {}(i, ...) i", self.names.detail_name("FIRST")),
            format!("#define {}(_, ...) __VA_ARGS__", self.names.detail_name("REST")),
        ]
    }

    /// The `CHOICE` define: `stack_depth - 1` ignored parameters named
    /// after the probe labels they swallow, then `size`, then the tail.
    pub fn choice(&self) -> String {
        let labels = self.codec.reversed_labels();
        let ignored = labels[..labels.len() - 1]
            .iter()
            .map(|label| format!("_{label}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "#define {}({}, size, ...) {}({}_, size)",
            self.names.detail_name("CHOICE"),
            ignored,
            self.names.detail_name("CAT"),
            self.names.detail_name("")
        )
    }

    /// The `CHOOSER` define: forwards the caller's arguments followed by
    /// the full descending probe sequence.
    pub fn chooser(&self) -> String {
        format!(
            "#define {}(...) {}(__VA_ARGS__ __VA_OPT__(, ) {})",
            self.names.detail_name("CHOOSER"),
            self.names.detail_name("CHOICE"),
            self.codec.reversed_labels().join(", ")
        )
    }
}
