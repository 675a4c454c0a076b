//! Entity Path Resolver
//!
//! The engine attaches a location chain to each violation, ordered from the
//! innermost entity outward. Display order is the opposite, so the chain is
//! walked in reverse while each reference is rendered as one path segment:
//!
//! - a block becomes `kind[index]` with an optional `{type="...",rel="..."}`
//!   qualifier built from whichever of the two is present;
//! - a data attribute becomes `data.name`;
//! - a plain attribute becomes `name`;
//! - unknown reference kinds contribute nothing.
//!
//! Resolution never fails. A violation without a chain locates at the
//! document root.

use crate::report::records::{EntityRef, Violation};

/// Path segment marking a failure on the document as a whole.
const DOCUMENT_ROOT: &str = "Document";

/// Resolve a violation's location chain into display segments, outermost
/// entity first.
pub fn resolve_path(violation: &Violation) -> Vec<String> {
    if violation.entity.is_empty() {
        return vec![DOCUMENT_ROOT.to_string()];
    }

    let mut path = Vec::with_capacity(violation.entity.len());

    for entity in violation.entity.iter().rev() {
        match entity {
            EntityRef::Block {
                kind,
                index,
                block_type,
                rel,
            } => path.push(block_segment(kind, *index, block_type, rel)),
            EntityRef::Data { name } => path.push(format!("data.{name}")),
            EntityRef::Attribute { name } => path.push(name.clone()),
            EntityRef::Unknown => {}
        }
    }

    path
}

fn block_segment(kind: &str, index: usize, block_type: &Option<String>, rel: &Option<String>) -> String {
    let mut qualifier = Vec::new();

    if let Some(block_type) = non_empty(block_type) {
        qualifier.push(format!("type=\"{block_type}\""));
    }

    if let Some(rel) = non_empty(rel) {
        qualifier.push(format!("rel=\"{rel}\""));
    }

    if qualifier.is_empty() {
        format!("{kind}[{index}]")
    } else {
        format!("{kind}[{index}]{{{}}}", qualifier.join(","))
    }
}

// The engine serializes absent qualifiers as either missing or empty fields;
// both mean "no qualifier".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
