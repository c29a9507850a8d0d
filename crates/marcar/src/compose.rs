//! Identifier composition and the enablement switch.
//!
//! [`compose`] turns a scope into the final identifier string, gated by the
//! configuration's `enabled` flag. The structural switch selects exactly one
//! of two labeled branches from the same flag; branch content is carried by
//! the tagged [`Branch`] type, so unrecognized branch kinds are
//! unrepresentable.

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::result::{MarcarError, MarcarResult};
use crate::scope::ScopeValue;

/// Outcome of composing an identifier at a boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Composed {
    /// The joined identifier to stamp onto the target node
    Identifier(String),
    /// Composition is disabled at this boundary; apply nothing
    Skipped,
}

impl Composed {
    /// Whether composition was bypassed
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// The composed identifier, if any
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(id) => Some(id),
            Self::Skipped => None,
        }
    }

    /// Consume the outcome, yielding the identifier if any
    #[must_use]
    pub fn into_identifier(self) -> Option<String> {
        match self {
            Self::Identifier(id) => Some(id),
            Self::Skipped => None,
        }
    }
}

/// Compose the identifier for a scope, honoring the enablement switch.
///
/// When the configuration is disabled this returns [`Composed::Skipped`]
/// without touching the scope, so callers can short-circuit before doing any
/// transformation work for the boundary.
#[must_use]
pub fn compose(scope: &ScopeValue, config: &Configuration) -> Composed {
    if !config.enabled {
        return Composed::Skipped;
    }
    Composed::Identifier(scope.join(&config.separator))
}

/// One labeled branch of the enablement switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<T> {
    /// Content yielded while identifiers are enabled
    On(T),
    /// Content yielded while identifiers are disabled
    Off(T),
}

/// Select exactly one branch's content based on the enablement flag.
///
/// The branch set must contain exactly one `On` and exactly one `Off`
/// branch; a missing or duplicate branch is a hard
/// [`MarcarError::Structure`] failure.
pub fn select_branch<T>(
    branches: impl IntoIterator<Item = Branch<T>>,
    config: &Configuration,
) -> MarcarResult<T> {
    let mut on = None;
    let mut off = None;

    for branch in branches {
        match branch {
            Branch::On(content) => {
                if on.is_some() {
                    return Err(MarcarError::Structure {
                        message: "duplicate On branch".to_string(),
                    });
                }
                on = Some(content);
            }
            Branch::Off(content) => {
                if off.is_some() {
                    return Err(MarcarError::Structure {
                        message: "duplicate Off branch".to_string(),
                    });
                }
                off = Some(content);
            }
        }
    }

    let on = on.ok_or_else(|| MarcarError::Structure {
        message: "missing On branch".to_string(),
    })?;
    let off = off.ok_or_else(|| MarcarError::Structure {
        message: "missing Off branch".to_string(),
    })?;

    Ok(if config.enabled { on } else { off })
}
