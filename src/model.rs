//! Domain entities: the location node and wire parsing.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::TreeResult;

/// A node in the location forest.
///
/// The hierarchy endpoint populates `id`, `name`, `icon`, `parent_id` and
/// `children`; the details endpoint returns flat records carrying the
/// metadata fields (`item_count`, `description`, timestamps) and no nesting.
/// Both payloads deserialize into this one type, absent fields falling back
/// to their defaults.
///
/// The forest is fetched wholesale and treated as an immutable snapshot
/// between fetches. Consumers rebuild via [`crate::merge_details`] /
/// [`crate::filter_tree`] instead of mutating nodes in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Ordered children; insertion order is display order. A payload without
    /// the field and one with `[]` are equivalent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Location>,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Location {
    /// Total number of nodes in the subtree rooted here, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Location::subtree_size)
            .sum::<usize>()
    }
}

/// Number of nodes in the whole forest.
pub fn forest_size(forest: &[Location]) -> usize {
    forest.iter().map(Location::subtree_size).sum()
}

/// Depth-first lookup of a node by id. First hit wins if ids were
/// (incorrectly) duplicated.
pub fn find_node<'a>(forest: &'a [Location], id: &str) -> Option<&'a Location> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Parse an endpoint payload into a forest.
///
/// A top-level value that is not an array is treated as an empty forest;
/// the backend occasionally answers with a bare error object and the caller
/// must stay usable. A malformed node inside an array is a real error.
pub fn parse_forest(json: &str) -> TreeResult<Vec<Location>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        warn!("expected JSON array payload, got {}", type_name(&value));
        Ok(Vec::new())
    }
}

fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
