//! Boundary cursor: explicit threading of configuration and scope.
//!
//! Instead of an ambient tree-scoped context, every composition step takes
//! its resolved [`Configuration`] and [`ScopeValue`] from a [`Boundary`]
//! value the caller threads down the component tree. A child derives its own
//! boundary from its parent's; parents are never mutated, so concurrent
//! evaluation of sibling subtrees needs no locks.
//!
//! Scope-only boundaries add a segment without stamping an attribute, which
//! is useful for layout wrappers. Leaf boundaries validate their target
//! node, extend the scope, and emit an [`AttributeAssignment`] for the host
//! to inject. When the configuration is disabled every operation
//! short-circuits before running the transformer pipeline.

use std::sync::Arc;

use crate::attribute::{
    validate_target, validate_target_lenient, AttributeAssignment, TargetContent,
};
use crate::compose::{compose, select_branch, Branch, Composed};
use crate::config::{ConfigOverrides, Configuration};
use crate::result::MarcarResult;
use crate::scope::ScopeValue;

/// A point in the host tree with a resolved configuration and scope.
///
/// Cheap to clone; the resolved configuration is shared, the scope is an
/// immutable value.
#[derive(Debug, Clone)]
pub struct Boundary {
    config: Arc<Configuration>,
    scope: ScopeValue,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new()
    }
}

impl Boundary {
    /// Top of the tree: default configuration, empty scope
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Arc::new(Configuration::default()),
            scope: ScopeValue::empty(),
        }
    }

    /// Top of the tree with configuration overrides resolved over defaults
    #[must_use]
    pub fn with_config(overrides: &ConfigOverrides) -> Self {
        Self {
            config: Arc::new(Configuration::resolve(overrides)),
            scope: ScopeValue::empty(),
        }
    }

    /// The resolved configuration in effect at this boundary
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The scope accumulated from the root down to this boundary
    #[must_use]
    pub const fn scope(&self) -> &ScopeValue {
        &self.scope
    }

    /// Establish a new configuration for the subtree below this boundary.
    ///
    /// Overrides are resolved over the built-in defaults, field by field;
    /// the current scope is inherited unchanged.
    #[must_use]
    pub fn configure(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            config: Arc::new(Configuration::resolve(overrides)),
            scope: self.scope.clone(),
        }
    }

    /// Derive a child boundary by appending one transformed segment.
    ///
    /// Scope-only: no attribute is emitted. Disabled configurations
    /// short-circuit and inherit the scope untouched.
    #[must_use]
    pub fn nest_scope(&self, value: &str) -> Self {
        if !self.config.enabled {
            return self.clone();
        }
        Self {
            config: Arc::clone(&self.config),
            scope: self.scope.nest(value, &self.config),
        }
    }

    /// Derive a child boundary that discards the inherited scope and starts
    /// over with one transformed segment.
    ///
    /// Resets the hierarchy at arbitrary depth, e.g. for a modal subtree.
    #[must_use]
    pub fn root_scope(&self, value: &str) -> Self {
        if !self.config.enabled {
            return self.clone();
        }
        Self {
            config: Arc::clone(&self.config),
            scope: ScopeValue::root(value, &self.config),
        }
    }

    /// Compose the identifier for the current scope, honoring the
    /// enablement switch
    #[must_use]
    pub fn compose(&self) -> Composed {
        compose(&self.scope, &self.config)
    }

    /// The attribute assignment for the current scope, if enabled
    #[must_use]
    pub fn assignment(&self) -> Option<AttributeAssignment> {
        self.compose()
            .into_identifier()
            .map(|id| AttributeAssignment::new(self.config.attribute_name.clone(), id))
    }

    /// Leaf boundary: validate strictly, nest one segment, and emit the
    /// assignment for the host to inject.
    ///
    /// Returns the derived boundary for descendants alongside the validated
    /// node. When disabled, validation still runs but no scope work or
    /// assignment happens.
    pub fn test_id<N>(
        &self,
        value: &str,
        content: TargetContent<N>,
    ) -> MarcarResult<TestIdOutcome<N>> {
        let node = validate_target(content)?;
        Ok(Self::outcome(self.nest_scope(value), node))
    }

    /// Lenient counterpart of [`Boundary::test_id`]: invalid targets are
    /// logged and yield `None` instead of failing
    pub fn test_id_lenient<N>(
        &self,
        value: &str,
        content: TargetContent<N>,
    ) -> Option<TestIdOutcome<N>> {
        let node = validate_target_lenient(content)?;
        Some(Self::outcome(self.nest_scope(value), node))
    }

    /// Leaf boundary that resets the scope chain before stamping, strict
    pub fn root_test_id<N>(
        &self,
        value: &str,
        content: TargetContent<N>,
    ) -> MarcarResult<TestIdOutcome<N>> {
        let node = validate_target(content)?;
        Ok(Self::outcome(self.root_scope(value), node))
    }

    /// Lenient counterpart of [`Boundary::root_test_id`]
    pub fn root_test_id_lenient<N>(
        &self,
        value: &str,
        content: TargetContent<N>,
    ) -> Option<TestIdOutcome<N>> {
        let node = validate_target_lenient(content)?;
        Some(Self::outcome(self.root_scope(value), node))
    }

    /// Select one of two labeled branches from this boundary's enablement
    /// flag
    pub fn switch<T>(&self, branches: impl IntoIterator<Item = Branch<T>>) -> MarcarResult<T> {
        select_branch(branches, &self.config)
    }

    fn outcome<N>(boundary: Self, node: N) -> TestIdOutcome<N> {
        let assignment = boundary.assignment();
        TestIdOutcome {
            boundary,
            node,
            assignment,
        }
    }
}

/// Result of a leaf boundary: the derived boundary for descendants, the
/// validated node, and the assignment the host should inject (if enabled).
#[derive(Debug, Clone)]
pub struct TestIdOutcome<N> {
    /// Boundary to thread into the node's descendants
    pub boundary: Boundary,
    /// The validated target node
    pub node: N,
    /// Attribute to inject; `None` when composition is disabled
    pub assignment: Option<AttributeAssignment>,
}

impl<N> TestIdOutcome<N> {
    /// The composed identifier, if an assignment was emitted
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.assignment.as_ref().map(|a| a.value.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CaseTransform;

    fn single() -> TargetContent<&'static str> {
        TargetContent::Single("node")
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn test_nested_scopes_compose_identifier() {
            // app / form / submit with defaults
            let outcome = Boundary::new()
                .root_scope("app")
                .nest_scope("form")
                .test_id("submit", single())
                .unwrap();
            assert_eq!(outcome.identifier(), Some("app-form-submit"));
            assert_eq!(outcome.assignment.as_ref().unwrap().name, "data-testid");
        }

        #[test]
        fn test_root_reset_discards_ancestor_scope() {
            let page = Boundary::new().root_scope("app");
            let outcome = page
                .root_scope("modal")
                .test_id("close", single())
                .unwrap();
            assert_eq!(outcome.identifier(), Some("modal-close"));
        }

        #[test]
        fn test_normalizers_shape_leaf_value() {
            let boundary = Boundary::with_config(
                &ConfigOverrides::new()
                    .case_transform(CaseTransform::Upper)
                    .space_replacement("_"),
            );
            let outcome = boundary.test_id("Submit Button!", single()).unwrap();
            assert_eq!(outcome.identifier(), Some("SUBMIT_BUTTON!"));
        }

        #[test]
        fn test_disabled_boundary_emits_nothing_below() {
            let page = Boundary::new().root_scope("app");
            let disabled = page.configure(&ConfigOverrides::new().enabled(false));
            let outcome = disabled
                .nest_scope("form")
                .test_id("submit", single())
                .unwrap();
            assert_eq!(outcome.assignment, None);
            // Descendants stay silent too
            let deeper = outcome.boundary.test_id("again", single()).unwrap();
            assert_eq!(deeper.assignment, None);
        }

        #[test]
        fn test_custom_separator() {
            let outcome = Boundary::with_config(&ConfigOverrides::new().separator(":"))
                .root_scope("settings")
                .nest_scope("profile")
                .test_id("save", single())
                .unwrap();
            assert_eq!(outcome.identifier(), Some("settings:profile:save"));
        }
    }

    mod threading_tests {
        use super::*;

        #[test]
        fn test_leaf_boundary_feeds_descendants() {
            let outcome = Boundary::new()
                .root_scope("app")
                .test_id("form", single())
                .unwrap();
            let child = outcome.boundary.test_id("submit", single()).unwrap();
            assert_eq!(child.identifier(), Some("app-form-submit"));
        }

        #[test]
        fn test_siblings_do_not_observe_each_other() {
            let form = Boundary::new().root_scope("form");
            let left = form.nest_scope("name");
            let right = form.nest_scope("email");
            assert_eq!(left.compose().identifier(), Some("form-name"));
            assert_eq!(right.compose().identifier(), Some("form-email"));
            assert_eq!(form.compose().identifier(), Some("form"));
        }

        #[test]
        fn test_configure_keeps_scope() {
            let page = Boundary::new().root_scope("page");
            let reconfigured = page.configure(&ConfigOverrides::new().attribute_name("data-qa"));
            let outcome = reconfigured.test_id("save", single()).unwrap();
            assert_eq!(outcome.assignment.as_ref().unwrap().name, "data-qa");
            assert_eq!(outcome.identifier(), Some("page-save"));
        }

        #[test]
        fn test_failed_boundary_leaves_parent_usable() {
            let page = Boundary::new().root_scope("page");
            assert!(page.test_id("x", TargetContent::<&str>::Fragment).is_err());
            // The parent chain is untouched by the failure
            let outcome = page.test_id("save", single()).unwrap();
            assert_eq!(outcome.identifier(), Some("page-save"));
        }
    }

    mod validation_mode_tests {
        use super::*;

        #[test]
        fn test_strict_leaf_rejects_fragment() {
            let result = Boundary::new().test_id("x", TargetContent::<&str>::Fragment);
            assert!(result.is_err());
        }

        #[test]
        fn test_lenient_leaf_suppresses_invalid_target() {
            let outcome =
                Boundary::new().test_id_lenient("x", TargetContent::Multiple(vec!["a", "b"]));
            assert!(outcome.is_none());
        }

        #[test]
        fn test_lenient_leaf_passes_valid_target() {
            let outcome = Boundary::new()
                .root_scope("app")
                .test_id_lenient("save", single())
                .unwrap();
            assert_eq!(outcome.identifier(), Some("app-save"));
        }

        #[test]
        fn test_root_leaf_variants() {
            let page = Boundary::new().root_scope("page");
            let strict = page.root_test_id("modal", single()).unwrap();
            assert_eq!(strict.identifier(), Some("modal"));
            let lenient = page.root_test_id_lenient("modal", single()).unwrap();
            assert_eq!(lenient.identifier(), Some("modal"));
            assert!(page
                .root_test_id_lenient("modal", TargetContent::<&str>::Empty)
                .is_none());
        }

        #[test]
        fn test_disabled_still_validates_target() {
            let disabled = Boundary::with_config(&ConfigOverrides::new().enabled(false));
            assert!(disabled
                .test_id("x", TargetContent::<&str>::Fragment)
                .is_err());
            let ok = disabled.test_id("x", single()).unwrap();
            assert_eq!(ok.assignment, None);
        }
    }

    mod switch_tests {
        use super::*;
        use crate::result::MarcarError;

        #[test]
        fn test_switch_follows_enablement() {
            let on = Boundary::new();
            assert_eq!(on.switch([Branch::On(1), Branch::Off(2)]).unwrap(), 1);
            let off = Boundary::with_config(&ConfigOverrides::new().enabled(false));
            assert_eq!(off.switch([Branch::On(1), Branch::Off(2)]).unwrap(), 2);
        }

        #[test]
        fn test_switch_rejects_malformed_branch_set() {
            let result = Boundary::new().switch([Branch::On(1), Branch::On(2), Branch::Off(3)]);
            assert!(matches!(result, Err(MarcarError::Structure { .. })));
        }
    }
}
