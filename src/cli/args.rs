//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Inspect and transform location hierarchy exports of the inventory backend
#[derive(Parser, Debug)]
#[command(name = "loctree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Multiple flags (-d -d) increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the location hierarchy as a tree
    Tree {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
    },

    /// List every location in display order, one per line
    Flatten {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
    },

    /// Filter the hierarchy by a name substring
    Filter {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
        /// Case-insensitive search query
        query: String,
    },

    /// Show the breadcrumb path to a location
    Path {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
        /// Target location id
        id: String,
    },

    /// List ids that cannot become the location's new parent
    Excluded {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
        /// Target location id
        id: String,
    },

    /// Merge details metadata into the hierarchy, JSON to stdout
    Merge {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
        /// Path to a details endpoint export (flat JSON array)
        details: String,
    },

    /// Assemble a nested forest from flat parent-linked records
    Build {
        /// Path to a details endpoint export (flat JSON array)
        details: String,
    },

    /// Check structural invariants of a hierarchy export
    Validate {
        /// Path to a hierarchy endpoint export (JSON array)
        hierarchy: String,
    },
}
