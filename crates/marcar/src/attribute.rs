//! Target-node validation and attribute assignment.
//!
//! The host rendering mechanism owns attribute injection; this module owns
//! the validation gate in front of it. The host classifies whatever content
//! was supplied to a boundary as a [`TargetContent`], and the shared
//! [`validate_target`] routine decides whether it can carry an attribute.
//! Strict boundaries surface failures as errors; lenient boundaries log a
//! diagnostic and suppress the attribute instead. Both entry points share
//! the one canonical routine.

use serde::{Deserialize, Serialize};

use crate::result::{MarcarError, MarcarResult};

/// Host classification of the content supplied to a scoping boundary.
///
/// The core never inspects host nodes itself; the host reports which shape
/// it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetContent<N> {
    /// Nothing renderable was supplied
    Empty,
    /// Exactly one concrete node capable of carrying an attribute
    Single(N),
    /// A transparent grouping placeholder rather than a concrete node
    Fragment,
    /// More than one sibling node where exactly one is required
    Multiple(Vec<N>),
}

/// Validate that supplied content is exactly one concrete node.
///
/// This is the canonical routine behind both the strict and the lenient
/// entry points.
pub fn validate_target<N>(content: TargetContent<N>) -> MarcarResult<N> {
    match content {
        TargetContent::Single(node) => Ok(node),
        TargetContent::Empty => Err(MarcarError::InvalidChild {
            message: "expected exactly one renderable node, got none".to_string(),
        }),
        TargetContent::Fragment => Err(MarcarError::FragmentNotAllowed),
        TargetContent::Multiple(nodes) => Err(MarcarError::MultipleChildren { count: nodes.len() }),
    }
}

/// Lenient variant of [`validate_target`]: log and suppress instead of
/// failing.
///
/// Returns `None` for invalid content after emitting a `tracing` warning;
/// the boundary then renders nothing rather than aborting composition.
pub fn validate_target_lenient<N>(content: TargetContent<N>) -> Option<N> {
    match validate_target(content) {
        Ok(node) => Some(node),
        Err(error) => {
            tracing::warn!(%error, "suppressing test-id attribute for invalid target");
            None
        }
    }
}

/// A computed attribute ready for the host to inject.
///
/// The host must set `name` to `value` on the target node, preserving all of
/// the node's other properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAssignment {
    /// Attribute name, e.g. `data-testid`
    pub name: String,
    /// The composed identifier
    pub value: String,
}

impl AttributeAssignment {
    /// Create an assignment
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Hand the assignment to a host node through the carrier seam
    pub fn apply_to<C: AttributeCarrier>(&self, carrier: &mut C) {
        carrier.set_attribute(&self.name, &self.value);
    }
}

/// Seam implemented by host node types that can receive attributes.
pub trait AttributeCarrier {
    /// Set a single attribute, leaving all other properties unchanged
    fn set_attribute(&mut self, name: &str, value: &str);
}
