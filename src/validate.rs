//! Structural invariant checks for a location forest.

use std::collections::HashSet;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::model::Location;

/// Verifies the forest invariants: ids unique across the whole forest, and
/// every `parent_id` pointing at the node that actually lists it as a child.
///
/// A node nested under a parent without carrying a `parent_id` is tolerated;
/// the hierarchy endpoint omits the field on nested nodes. Reports the first
/// violation found in pre-order.
#[instrument(level = "debug", skip(forest), fields(roots = forest.len()))]
pub fn validate_forest(forest: &[Location]) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for root in forest {
        walk(root, None, &mut seen)?;
    }
    Ok(())
}

fn walk(node: &Location, parent: Option<&str>, seen: &mut HashSet<String>) -> TreeResult<()> {
    if !seen.insert(node.id.clone()) {
        return Err(TreeError::DuplicateId(node.id.clone()));
    }
    if let Some(claimed) = node.parent_id.as_deref() {
        if parent != Some(claimed) {
            return Err(TreeError::ParentChildMismatch {
                id: node.id.clone(),
                parent_id: claimed.to_string(),
            });
        }
    }
    for child in &node.children {
        walk(child, Some(&node.id), seen)?;
    }
    Ok(())
}
