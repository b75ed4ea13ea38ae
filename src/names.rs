//! Symbol naming for the generated macro family.
//!
//! Every generated macro name is composed from ordered segments
//! (namespace, optional `DETAIL` marker, prefix, role or index suffix),
//! joined with `_`. Empty segments are dropped, and the variable suffix
//! is uppercased, so identical configuration always yields identical
//! names.

use std::fmt;

use crate::config::GenerationConfig;

/// Marker segment that places a symbol in the implementation-detail
/// sub-namespace.
const DETAIL_SEGMENT: &str = "DETAIL";

/// A generated macro identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Joins the non-empty segments with `_`.
    fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        Symbol(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composes symbols for one generation run.
#[derive(Debug, Clone)]
pub struct NameBuilder {
    namespace: String,
    prefix: String,
    detail_namespaced: bool,
}

impl NameBuilder {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            namespace: config.namespace().to_string(),
            prefix: config.prefix().to_string(),
            detail_namespaced: config.detail_namespaced(),
        }
    }

    /// Detail-namespaced name. All generated symbols except the entry
    /// point use this form.
    pub fn detail_name(&self, suffix: &str) -> Symbol {
        let suffix = suffix.to_uppercase();
        Symbol::from_segments([
            self.namespace.as_str(),
            DETAIL_SEGMENT,
            self.prefix.as_str(),
            suffix.as_str(),
        ])
    }

    /// Name for the entry-point macro: detail-namespaced only when the
    /// configuration asks for it.
    pub fn public_name(&self, suffix: &str) -> Symbol {
        if self.detail_namespaced {
            return self.detail_name(suffix);
        }
        let suffix = suffix.to_uppercase();
        Symbol::from_segments([
            self.namespace.as_str(),
            self.prefix.as_str(),
            suffix.as_str(),
        ])
    }
}
