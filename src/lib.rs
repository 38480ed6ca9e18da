//! Location hierarchy engine: the pure tree operations behind an inventory
//! manager's Locations view.
//!
//! The forest is fetched wholesale from the backend and treated as an
//! immutable snapshot between fetches. Every function here takes the
//! snapshot as an explicit parameter, returns new structures, and never
//! mutates its input, so the pieces are testable without mounting any UI.

pub mod breadcrumb;
pub mod builder;
pub mod cli;
pub mod display;
pub mod errors;
pub mod filter;
pub mod flatten;
pub mod merge;
pub mod model;
pub mod query;
pub mod util;
pub mod validate;

pub use breadcrumb::breadcrumb_path;
pub use builder::ForestBuilder;
pub use errors::{TreeError, TreeResult};
pub use filter::filter_tree;
pub use flatten::flatten;
pub use merge::merge_details;
pub use model::{find_node, forest_size, parse_forest, Location};
pub use query::{ancestor_ids, descendant_ids, excluded_ids};
pub use validate::validate_forest;
