//! Pre-order flattening of a location forest.

use tracing::instrument;

use crate::model::Location;

/// Flattens a forest into a single list: a node before its children,
/// children before following siblings.
///
/// Every node appears exactly once and the order is the tree's intrinsic
/// display order, which selection dialogs show to users. Empty forests
/// yield an empty list.
#[instrument(level = "trace", skip(forest), fields(roots = forest.len()))]
pub fn flatten(forest: &[Location]) -> Vec<Location> {
    let mut result = Vec::with_capacity(forest.len());
    collect(forest, &mut result);
    result
}

fn collect(nodes: &[Location], out: &mut Vec<Location>) {
    for node in nodes {
        out.push(node.clone());
        collect(&node.children, out);
    }
}
