//! Scoped Form Demo - Hierarchical Test-Id Composition
//!
//! Walks a small component tree (page, form, modal) and shows how each
//! boundary contributes a segment to the composed `data-testid` value.
//!
//! # Running
//!
//! ```bash
//! cargo run --example scoped_form -p marcar
//! ```

#![allow(clippy::unwrap_used)]

use marcar::{
    AttributeAssignment, AttributeCarrier, Boundary, CaseTransform, ConfigOverrides, TargetContent,
};

/// Toy stand-in for a host node that can carry attributes.
#[derive(Debug)]
struct Element {
    tag: &'static str,
    attributes: Vec<(String, String)>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
        }
    }
}

impl AttributeCarrier for Element {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.push((name.to_string(), value.to_string()));
    }
}

fn stamp(element: &mut Element, assignment: Option<&AttributeAssignment>) {
    if let Some(assignment) = assignment {
        assignment.apply_to(element);
    }
    match element.attributes.first() {
        Some((name, value)) => println!("  <{} {}=\"{}\">", element.tag, name, value),
        None => println!("  <{}> (no test id)", element.tag),
    }
}

fn main() {
    println!("=== Marcar Scoped Form Demo ===\n");

    // A page-level boundary with default configuration.
    println!("Default configuration:");
    let page = Boundary::new().root_scope("checkout");
    let form = page.test_id("form", TargetContent::Single(())).unwrap();
    let mut form_el = Element::new("form");
    stamp(&mut form_el, form.assignment.as_ref());

    for field in ["email", "address", "submit"] {
        let outcome = form
            .boundary
            .test_id(field, TargetContent::Single(()))
            .unwrap();
        let mut el = Element::new("input");
        stamp(&mut el, outcome.assignment.as_ref());
    }

    // A modal subtree that resets the scope chain.
    println!("\nRoot reset inside a modal:");
    let modal = form
        .boundary
        .root_test_id("confirm-modal", TargetContent::Single(()))
        .unwrap();
    let mut modal_el = Element::new("dialog");
    stamp(&mut modal_el, modal.assignment.as_ref());

    // Normalizers shape raw labels into stable identifiers.
    println!("\nNormalized segments (lowercase, spaces to '-'):");
    let normalized = Boundary::with_config(
        &ConfigOverrides::new()
            .space_replacement("-")
            .case_transform(CaseTransform::Lower),
    )
    .root_scope("Main Menu");
    let item = normalized
        .test_id("Sign Out", TargetContent::Single(()))
        .unwrap();
    let mut item_el = Element::new("button");
    stamp(&mut item_el, item.assignment.as_ref());

    // Disabled subtrees emit nothing.
    println!("\nDisabled configuration:");
    let silent = page.configure(&ConfigOverrides::new().enabled(false));
    let outcome = silent.test_id("submit", TargetContent::Single(())).unwrap();
    let mut silent_el = Element::new("button");
    stamp(&mut silent_el, outcome.assignment.as_ref());

    println!("\n=== Demo Complete ===");
}
