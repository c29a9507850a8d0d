//! Marcar: Deterministic Hierarchical Test-Id Composition
//!
//! Marcar (Spanish: "to mark/tag") composes deterministic, hierarchical
//! identifier strings for elements in a tree of nested visual components,
//! for use by automated UI tests. A caller establishes a root identifier,
//! nests additional scopes while descending the component tree, and leaf
//! boundaries stamp the composed identifier onto a designated attribute of
//! exactly one rendered node.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     MARCAR Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────────┐   ┌─────────────┐   ┌──────────────────┐  │
//! │  │ Configuration │──►│ Transformer │──►│ Scope Chain      │  │
//! │  │ Resolver      │   │ Pipeline    │   │ (root / nest)    │  │
//! │  └───────┬───────┘   └─────────────┘   └────────┬─────────┘  │
//! │          │            ┌─────────────────────────▼─────────┐  │
//! │          └───────────►│ Composer & Switch → Assignment    │  │
//! │                       └───────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host rendering mechanism stays external: configuration and scope are
//! threaded explicitly through [`Boundary`] values, target content is
//! classified by the host as a [`TargetContent`], and attribute injection
//! happens on the host's side of the [`AttributeCarrier`] seam.
//!
//! # Example
//!
//! ```
//! use marcar::{Boundary, TargetContent};
//!
//! let form = Boundary::new().root_scope("app").nest_scope("form");
//! let submit = form.test_id("submit", TargetContent::Single(()))?;
//! assert_eq!(submit.identifier(), Some("app-form-submit"));
//! # Ok::<(), marcar::MarcarError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod attribute;
mod boundary;
mod compose;
mod config;
mod result;
mod scope;
mod transformer;

pub use attribute::{
    validate_target, validate_target_lenient, AttributeAssignment, AttributeCarrier, TargetContent,
};
pub use boundary::{Boundary, TestIdOutcome};
pub use compose::{compose, select_branch, Branch, Composed};
pub use config::{
    CaseTransform, ConfigOverrides, Configuration, DEFAULT_ATTRIBUTE_NAME, DEFAULT_SEPARATOR,
};
pub use result::{MarcarError, MarcarResult};
pub use scope::ScopeValue;
pub use transformer::{apply_pipeline, Transformer};
