//! Generation configuration: a validated, immutable record resolved once
//! per run and passed to every pure generation function.

use crate::errors::FoldgenError;

/// Default prefix for the generated macro family.
pub const DEFAULT_PREFIX: &str = "REDUCE";

/// Default maximum number of reducible arguments.
pub const DEFAULT_STACK_DEPTH: usize = 256;

/// Immutable input for one generation run.
///
/// Construction validates the two invariants the generator depends on:
/// the namespace is a non-empty token (name composition silently drops
/// empty segments, so an empty namespace would produce ambiguous
/// symbols), and the stack depth is at least 1 (the chain always
/// contains the index-0 base case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    namespace: String,
    prefix: String,
    stack_depth: usize,
    detail_namespaced: bool,
}

impl GenerationConfig {
    pub fn new(
        namespace: impl Into<String>,
        prefix: impl Into<String>,
        stack_depth: usize,
        detail_namespaced: bool,
    ) -> Result<Self, FoldgenError> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(FoldgenError::EmptyNamespace);
        }
        if stack_depth == 0 {
            return Err(FoldgenError::ZeroStackDepth(stack_depth));
        }
        Ok(Self {
            namespace,
            prefix: prefix.into(),
            stack_depth,
            detail_namespaced,
        })
    }

    /// Config with the default prefix, stack depth, and detail namespacing.
    pub fn with_defaults(namespace: impl Into<String>) -> Result<Self, FoldgenError> {
        Self::new(namespace, DEFAULT_PREFIX, DEFAULT_STACK_DEPTH, true)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Maximum number of list elements one generated reduce call consumes.
    pub fn stack_depth(&self) -> usize {
        self.stack_depth
    }

    /// Whether the primary entry-point macro lives in the detail namespace.
    pub fn detail_namespaced(&self) -> bool {
        self.detail_namespaced
    }
}
