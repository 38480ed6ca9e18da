//! Recursive name search over a location forest.

use tracing::instrument;

use crate::model::Location;

/// Filters a forest by case-insensitive substring match on node names.
///
/// A node survives when its own name matches or when any descendant matches.
/// Ancestors of a match are kept so the path to the hit stays visible, with
/// non-matching siblings pruned. A node whose own name matches and has no
/// matching descendants keeps its original children untouched, so selecting
/// a direct hit still lets the user browse everything inside it.
///
/// A blank query returns the forest as-is. Sibling order is preserved and
/// the input is never mutated.
#[instrument(level = "debug", skip(forest))]
pub fn filter_tree(forest: &[Location], query: &str) -> Vec<Location> {
    if query.trim().is_empty() {
        return forest.to_vec();
    }
    filter_nodes(forest, &query.to_lowercase())
}

fn filter_nodes(nodes: &[Location], needle: &str) -> Vec<Location> {
    nodes
        .iter()
        .filter_map(|node| {
            let matches = node.name.to_lowercase().contains(needle);
            let children = filter_nodes(&node.children, needle);
            if !matches && children.is_empty() {
                return None;
            }
            let mut kept = node.clone();
            if !children.is_empty() {
                kept.children = children;
            }
            Some(kept)
        })
        .collect()
}
