//! Assembles a nested forest from the flat, parent-linked records of the
//! details endpoint.

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::model::Location;

/// Builds a nested forest out of flat location records.
///
/// Records link to their owner via `parent_id`; the builder groups children
/// under their parents (preserving record order), detects duplicate ids and
/// dangling parent references, and reports parent cycles instead of losing
/// the nodes trapped in them.
pub struct ForestBuilder {
    children_of: HashMap<String, Vec<Location>>,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self {
            children_of: HashMap::new(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn build(&mut self, records: Vec<Location>) -> TreeResult<Vec<Location>> {
        self.children_of.clear();

        let mut known = HashSet::new();
        for record in &records {
            if !known.insert(record.id.clone()) {
                return Err(TreeError::DuplicateId(record.id.clone()));
            }
        }
        for record in &records {
            if let Some(parent_id) = record.parent_id.as_deref() {
                if !known.contains(parent_id) {
                    return Err(TreeError::ParentNotFound {
                        id: record.id.clone(),
                        parent_id: parent_id.to_string(),
                    });
                }
            }
        }

        // Partition into roots and per-parent child groups, in record order
        let mut roots = Vec::new();
        for record in records {
            match record.parent_id.clone() {
                Some(parent_id) => self
                    .children_of
                    .entry(parent_id)
                    .or_default()
                    .push(record),
                None => roots.push(record),
            }
        }

        let forest: Vec<Location> = roots.into_iter().map(|root| self.attach(root)).collect();

        // Records still grouped under a parent were never reached from a
        // root, which only happens when their parent pointers form a cycle
        if let Some(children) = self.children_of.values().next() {
            return Err(TreeError::CycleDetected(children[0].id.clone()));
        }

        Ok(forest)
    }

    fn attach(&mut self, mut node: Location) -> Location {
        let children = self.children_of.remove(&node.id).unwrap_or_default();
        node.children = children.into_iter().map(|c| self.attach(c)).collect();
        node
    }
}
