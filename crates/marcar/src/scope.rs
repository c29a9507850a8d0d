//! Scope chain: the ordered segments accumulated from the root down.
//!
//! A [`ScopeValue`] is an immutable, append-only sequence of segments that
//! have already passed through the transformer pipeline. Nested boundaries
//! never mutate a parent's scope; they derive a new value from it. Empty
//! segments keep their position in the sequence but vanish when the scope is
//! joined into an identifier.

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::transformer::apply_pipeline;

/// The ordered, joinable sequence of segments for one boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeValue {
    segments: Vec<String>,
}

impl ScopeValue {
    /// The empty scope at the top of the tree
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Start a new scope with a single transformed segment, discarding any
    /// ambient parent scope.
    ///
    /// Used to reset the hierarchy at arbitrary nesting depth, e.g. entering
    /// a modal subtree that should not inherit the page's scope.
    #[must_use]
    pub fn root(value: &str, config: &Configuration) -> Self {
        Self {
            segments: vec![apply_pipeline(value, &config.transformers)],
        }
    }

    /// Derive a new scope by appending one transformed segment.
    ///
    /// The parent is only read, never mutated.
    #[must_use]
    pub fn nest(&self, value: &str, config: &Configuration) -> Self {
        let mut segments = self.segments.clone();
        segments.push(apply_pipeline(value, &config.transformers));
        Self { segments }
    }

    /// The accumulated segments, in order, including any empty ones
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether no segments have been contributed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join the non-empty segments with the given separator.
    ///
    /// Empty segments are skipped, so they never produce doubled, leading,
    /// or trailing separators.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
