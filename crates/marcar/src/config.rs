//! Configuration for test-id generation.
//!
//! A [`Configuration`] is resolved once per configuration boundary by merging
//! a partial [`ConfigOverrides`] over the built-in defaults, field by field.
//! Resolution is total: every field of the result is populated, and resolving
//! the same overrides twice yields an equal configuration.

use serde::{Deserialize, Serialize};

use crate::transformer::Transformer;

/// Default attribute name written to target nodes
pub const DEFAULT_ATTRIBUTE_NAME: &str = "data-testid";

/// Default separator placed between scope segments
pub const DEFAULT_SEPARATOR: &str = "-";

/// Case folding applied to segments as a convenience normalizer.
///
/// `None` is the no-op; unknown tags are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// Fold the segment to lower case
    Lower,
    /// Fold the segment to upper case
    Upper,
    /// Leave the segment unchanged
    #[default]
    None,
}

impl CaseTransform {
    /// The pipeline entry equivalent to this case fold, if any
    #[must_use]
    pub fn to_transformer(self) -> Option<Transformer> {
        match self {
            Self::Lower => Some(Transformer::Lowercase),
            Self::Upper => Some(Transformer::Uppercase),
            Self::None => None,
        }
    }
}

/// Resolved configuration in effect at a boundary.
///
/// Immutable once resolved; consumers only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Master switch; when false no identifiers are composed or applied
    pub enabled: bool,
    /// Name of the attribute written to the target node
    pub attribute_name: String,
    /// String inserted between composed segments
    pub separator: String,
    /// Ordered pipeline applied to every raw segment before joining
    pub transformers: Vec<Transformer>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: true,
            attribute_name: DEFAULT_ATTRIBUTE_NAME.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            transformers: Vec::new(),
        }
    }
}

impl Configuration {
    /// Resolve a full configuration from partial overrides.
    ///
    /// Equivalent to merging `overrides` over [`Configuration::default`].
    #[must_use]
    pub fn resolve(overrides: &ConfigOverrides) -> Self {
        Self::default().merged_with(overrides)
    }

    /// Field-wise merge: each field present in `overrides` replaces the
    /// corresponding field of `self`; absent fields keep their value.
    ///
    /// The convenience normalizers compose with the transformer list rather
    /// than replacing it: space replacement is prepended, case folding
    /// appended.
    #[must_use]
    pub fn merged_with(&self, overrides: &ConfigOverrides) -> Self {
        let mut transformers = overrides
            .transformers
            .clone()
            .unwrap_or_else(|| self.transformers.clone());
        if let Some(replacement) = &overrides.space_replacement {
            transformers.insert(0, Transformer::replace_spaces(replacement.clone()));
        }
        if let Some(case) = overrides.case_transform {
            if let Some(fold) = case.to_transformer() {
                transformers.push(fold);
            }
        }

        Self {
            enabled: overrides.enabled.unwrap_or(self.enabled),
            attribute_name: overrides
                .attribute_name
                .clone()
                .unwrap_or_else(|| self.attribute_name.clone()),
            separator: overrides
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            transformers,
        }
    }
}

/// Partial configuration merged over defaults at a configuration boundary.
///
/// All fields are optional; absent fields keep the default. Explicitly
/// provided falsy values (`enabled(false)`, an empty separator) win over
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Override for the master switch
    pub enabled: Option<bool>,
    /// Override for the attribute name
    pub attribute_name: Option<String>,
    /// Override for the segment separator
    pub separator: Option<String>,
    /// Replacement for the whole transformer pipeline
    pub transformers: Option<Vec<Transformer>>,
    /// Convenience normalizer: replace whitespace in every segment,
    /// prepended to the pipeline
    pub space_replacement: Option<String>,
    /// Convenience normalizer: case folding for every segment, appended to
    /// the pipeline
    pub case_transform: Option<CaseTransform>,
}

impl ConfigOverrides {
    /// Create empty overrides (resolves to the defaults)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the master switch
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the attribute name written to target nodes
    #[must_use]
    pub fn attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    /// Set the separator placed between segments
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the transformer pipeline
    #[must_use]
    pub fn transformers(mut self, transformers: Vec<Transformer>) -> Self {
        self.transformers = Some(transformers);
        self
    }

    /// Replace whitespace in every segment with the given string
    #[must_use]
    pub fn space_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.space_replacement = Some(replacement.into());
        self
    }

    /// Fold every segment to the given case
    #[must_use]
    pub const fn case_transform(mut self, case: CaseTransform) -> Self {
        self.case_transform = Some(case);
        self
    }
}
