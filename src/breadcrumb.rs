//! Root-to-node breadcrumb resolution.

use crate::model::Location;

/// Names from the owning root down to and including the node with `id`.
///
/// Searches depth-first from each root. An unknown id yields an empty path
/// (the caller decides how to render that). If an id is (incorrectly)
/// duplicated, the first depth-first hit wins.
pub fn breadcrumb_path(forest: &[Location], id: &str) -> Vec<String> {
    for root in forest {
        let mut path = Vec::new();
        if descend(root, id, &mut path) {
            return path;
        }
    }
    Vec::new()
}

fn descend(node: &Location, id: &str, path: &mut Vec<String>) -> bool {
    if node.id == id {
        path.push(node.name.clone());
        return true;
    }
    for child in &node.children {
        if descend(child, id, path) {
            path.insert(0, node.name.clone());
            return true;
        }
    }
    false
}
