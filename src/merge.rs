//! Merge of hierarchy structure with flat per-location metadata.
//!
//! The backend exposes the tree through two endpoints: the hierarchy
//! endpoint is authoritative for structure (ids, names, parentage, child
//! order), the details endpoint for metadata (item counts, description,
//! timestamps). Merging is an explicit typed operation with fixed
//! precedence, not a field-spread.

use std::collections::HashMap;

use tracing::instrument;

use crate::model::Location;

/// Enriches a hierarchy forest with metadata from a flat details list.
///
/// `details` is indexed by id once, then the hierarchy is rebuilt
/// recursively. Structure always comes from `hierarchy`; a details entry's
/// own `children` are ignored. Nodes missing from `details` keep their
/// hierarchy-side optional fields and get an `item_count` of 0. Hierarchy
/// order is preserved.
#[instrument(level = "debug", skip_all, fields(roots = hierarchy.len(), details = details.len()))]
pub fn merge_details(hierarchy: &[Location], details: &[Location]) -> Vec<Location> {
    let by_id: HashMap<&str, &Location> =
        details.iter().map(|d| (d.id.as_str(), d)).collect();
    merge_nodes(hierarchy, &by_id)
}

fn merge_nodes(nodes: &[Location], by_id: &HashMap<&str, &Location>) -> Vec<Location> {
    nodes
        .iter()
        .map(|node| {
            let mut merged = node.clone();
            merged.children = merge_nodes(&node.children, by_id);
            match by_id.get(node.id.as_str()) {
                Some(detail) => {
                    merged.item_count = detail.item_count;
                    merged.description = detail.description.clone();
                    merged.created_at = detail.created_at.clone();
                    merged.updated_at = detail.updated_at.clone();
                }
                None => {
                    merged.item_count = 0;
                }
            }
            merged
        })
        .collect()
}
