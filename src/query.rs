//! Relationship queries: descendants, ancestors, and the reparent
//! exclusion set.

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::model::{find_node, Location};

/// Ids of every node below `id`, excluding `id` itself.
///
/// An unknown id yields an empty set, not an error: the selection may be
/// stale after a concurrent delete.
#[instrument(level = "trace", skip(forest))]
pub fn descendant_ids(forest: &[Location], id: &str) -> HashSet<String> {
    let mut ids = HashSet::new();
    if let Some(node) = find_node(forest, id) {
        collect_descendants(node, &mut ids);
    }
    ids
}

fn collect_descendants(node: &Location, out: &mut HashSet<String>) {
    for child in &node.children {
        out.insert(child.id.clone());
        collect_descendants(child, out);
    }
}

/// Ids of every node above `id`, excluding `id` itself.
///
/// Follows `parent_id` links upward until a root. The walk is bounded by the
/// total node count; exceeding the bound means the parent pointers form a
/// cycle, reported as [`TreeError::CycleDetected`] so callers can tell
/// "no ancestors" from corrupt data.
#[instrument(level = "trace", skip(forest))]
pub fn ancestor_ids(forest: &[Location], id: &str) -> TreeResult<HashSet<String>> {
    let index = node_index(forest);
    let bound = index.len();

    let mut ancestors = HashSet::new();
    let mut current = match index.get(id) {
        Some(node) => node.parent_id.as_deref(),
        None => return Ok(ancestors),
    };

    let mut steps = 0usize;
    while let Some(parent_id) = current {
        if steps >= bound {
            return Err(TreeError::CycleDetected(id.to_string()));
        }
        steps += 1;
        ancestors.insert(parent_id.to_string());
        current = index
            .get(parent_id)
            .and_then(|node| node.parent_id.as_deref());
    }
    Ok(ancestors)
}

/// The ids that cannot legally become `id`'s new parent or child: the node
/// itself, everything below it, and everything above it.
///
/// Reparent validation must reject any target whose id is in this set;
/// anything else can be assigned without creating a cycle or a duplicate
/// edge.
#[instrument(level = "debug", skip(forest))]
pub fn excluded_ids(forest: &[Location], id: &str) -> TreeResult<HashSet<String>> {
    let mut ids = ancestor_ids(forest, id)?;
    ids.extend(descendant_ids(forest, id));
    ids.insert(id.to_string());
    Ok(ids)
}

/// Flat id lookup over the whole forest. First occurrence wins on
/// duplicated ids.
fn node_index(forest: &[Location]) -> HashMap<&str, &Location> {
    let mut index = HashMap::new();
    let mut stack: Vec<&Location> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        index.entry(node.id.as_str()).or_insert(node);
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    index
}
