//! Segment transformers applied before identifiers are joined.
//!
//! A transformer is a pure string-to-string function. Each scope boundary
//! runs its raw segment through the configured pipeline, strictly
//! left-to-right, before the segment joins the scope chain. An empty
//! pipeline is the identity function.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// A pure string-to-string normalization step for scope segments.
///
/// Built-in variants cover the common normalizations; `Custom` accepts any
/// caller-supplied pure function.
#[derive(Clone)]
pub enum Transformer {
    /// Convert the segment to lower case
    Lowercase,
    /// Convert the segment to upper case
    Uppercase,
    /// Replace every whitespace character with the given string
    ReplaceSpaces(String),
    /// Replace every match of a pattern with the given string
    Replace {
        /// Pattern used to find matches
        pattern: Regex,
        /// Replacement applied to each match
        replacement: String,
    },
    /// Caller-supplied pure function over the segment
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl Transformer {
    /// Create a whitespace-replacing transformer
    #[must_use]
    pub fn replace_spaces(replacement: impl Into<String>) -> Self {
        Self::ReplaceSpaces(replacement.into())
    }

    /// Create a regex-replacing transformer
    #[must_use]
    pub fn replace(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self::Replace {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Create a transformer from a caller-supplied pure function
    #[must_use]
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Apply this transformer to a single segment
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Lowercase => value.to_lowercase(),
            Self::Uppercase => value.to_uppercase(),
            Self::ReplaceSpaces(replacement) => {
                let mut out = String::with_capacity(value.len());
                for ch in value.chars() {
                    if ch.is_whitespace() {
                        out.push_str(replacement);
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
            Self::Replace {
                pattern,
                replacement,
            } => pattern.replace_all(value, replacement.as_str()).into_owned(),
            Self::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lowercase => f.write_str("Lowercase"),
            Self::Uppercase => f.write_str("Uppercase"),
            Self::ReplaceSpaces(replacement) => {
                f.debug_tuple("ReplaceSpaces").field(replacement).finish()
            }
            Self::Replace {
                pattern,
                replacement,
            } => f
                .debug_struct("Replace")
                .field("pattern", &pattern.as_str())
                .field("replacement", replacement)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Transformer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Lowercase, Self::Lowercase) | (Self::Uppercase, Self::Uppercase) => true,
            (Self::ReplaceSpaces(a), Self::ReplaceSpaces(b)) => a == b,
            (
                Self::Replace {
                    pattern: pa,
                    replacement: ra,
                },
                Self::Replace {
                    pattern: pb,
                    replacement: rb,
                },
            ) => pa.as_str() == pb.as_str() && ra == rb,
            // Closures have no structural identity beyond the allocation
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Run a segment through a transformer pipeline, strictly left-to-right.
///
/// Each transformer receives the previous transformer's output; an empty
/// pipeline returns the input unchanged.
#[must_use]
pub fn apply_pipeline(value: &str, transformers: &[Transformer]) -> String {
    transformers
        .iter()
        .fold(value.to_string(), |current, transformer| {
            transformer.apply(&current)
        })
}
