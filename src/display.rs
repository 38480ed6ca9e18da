//! Terminal rendering of a location forest via termtree.

use termtree::Tree;

use crate::model::Location;

pub trait LocationTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl LocationTreeConvert for Location {
    fn to_tree_string(&self) -> Tree<String> {
        let label = if self.item_count > 0 {
            format!("{} ({})", self.name, self.item_count)
        } else {
            self.name.clone()
        };

        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}
