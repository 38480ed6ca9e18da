use std::fs;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::breadcrumb::breadcrumb_path;
use crate::builder::ForestBuilder;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::display::LocationTreeConvert;
use crate::errors::TreeResult;
use crate::filter::filter_tree;
use crate::flatten::flatten;
use crate::merge::merge_details;
use crate::model::{parse_forest, Location};
use crate::query::excluded_ids;
use crate::validate::validate_forest;

pub fn execute_command(cli: &Cli) -> TreeResult<()> {
    match &cli.command {
        Some(Commands::Tree { hierarchy }) => _tree(hierarchy),
        Some(Commands::Flatten { hierarchy }) => _flatten(hierarchy),
        Some(Commands::Filter { hierarchy, query }) => _filter(hierarchy, query),
        Some(Commands::Path { hierarchy, id }) => _path(hierarchy, id),
        Some(Commands::Excluded { hierarchy, id }) => _excluded(hierarchy, id),
        Some(Commands::Merge { hierarchy, details }) => _merge(hierarchy, details),
        Some(Commands::Build { details }) => _build(details),
        Some(Commands::Validate { hierarchy }) => _validate(hierarchy),
        None => Ok(()),
    }
}

fn load_forest(path: &str) -> TreeResult<Vec<Location>> {
    let json = fs::read_to_string(path)?;
    parse_forest(&json)
}

#[instrument]
fn _tree(hierarchy: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    for root in &forest {
        print!("{}", root.to_tree_string());
    }
    Ok(())
}

#[instrument]
fn _flatten(hierarchy: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    for node in flatten(&forest) {
        output::info(&format!("{}\t{}", node.id, node.name));
    }
    Ok(())
}

#[instrument]
fn _filter(hierarchy: &str, query: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    let filtered = filter_tree(&forest, query);
    debug!("{} of {} roots survived", filtered.len(), forest.len());
    if filtered.is_empty() {
        output::info(&format!("No locations found matching \"{}\"", query));
        return Ok(());
    }
    for root in &filtered {
        print!("{}", root.to_tree_string());
    }
    Ok(())
}

#[instrument]
fn _path(hierarchy: &str, id: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    let path = breadcrumb_path(&forest, id);
    if path.is_empty() {
        output::info("N/A");
    } else {
        output::info(&path.iter().join(" > "));
    }
    Ok(())
}

#[instrument]
fn _excluded(hierarchy: &str, id: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    let ids = excluded_ids(&forest, id)?;
    for excluded in ids.iter().sorted() {
        output::info(excluded);
    }
    Ok(())
}

#[instrument]
fn _merge(hierarchy: &str, details: &str) -> TreeResult<()> {
    let structure = load_forest(hierarchy)?;
    let metadata = load_forest(details)?;
    let merged = merge_details(&structure, &metadata);
    output::info(&serde_json::to_string_pretty(&merged)?);
    Ok(())
}

#[instrument]
fn _build(details: &str) -> TreeResult<()> {
    let records = load_forest(details)?;
    let forest = ForestBuilder::new().build(records)?;
    output::info(&serde_json::to_string_pretty(&forest)?);
    Ok(())
}

#[instrument]
fn _validate(hierarchy: &str) -> TreeResult<()> {
    let forest = load_forest(hierarchy)?;
    match validate_forest(&forest) {
        Ok(()) => {
            output::success(&format!("{}: hierarchy is consistent", hierarchy));
            Ok(())
        }
        Err(e) => {
            output::failure(&e);
            Err(e)
        }
    }
}
