//! Tests for CLI command dispatch over exported JSON files

use std::path::PathBuf;

use tempfile::TempDir;

use loctree::cli::args::{Cli, Commands};
use loctree::cli::commands::execute_command;

fn write_export(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write export file");
    path
}

fn cli(command: Commands) -> Cli {
    Cli {
        debug: 0,
        info: false,
        generator: None,
        command: Some(command),
    }
}

const HIERARCHY: &str = r#"[
  {"id":"1","name":"Home","children":[
    {"id":"2","name":"Garage","parentId":"1"}
  ]},
  {"id":"3","name":"Office"}
]"#;

#[test]
fn given_hierarchy_export_when_validating_then_succeeds() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_export(&temp, "tree.json", HIERARCHY);

    // Act
    let result = execute_command(&cli(Commands::Validate {
        hierarchy: path.display().to_string(),
    }));

    // Assert
    assert!(result.is_ok());
}

#[test]
fn given_inconsistent_export_when_validating_then_errors() {
    // Arrange: child claims a parent that does not list it
    let temp = TempDir::new().unwrap();
    let path = write_export(
        &temp,
        "tree.json",
        r#"[{"id":"1","name":"Home","children":[{"id":"2","name":"Garage","parentId":"3"}]}]"#,
    );

    // Act
    let result = execute_command(&cli(Commands::Validate {
        hierarchy: path.display().to_string(),
    }));

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_hierarchy_and_details_when_merging_then_succeeds() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let hierarchy = write_export(&temp, "tree.json", HIERARCHY);
    let details = write_export(
        &temp,
        "details.json",
        r#"[{"id":"1","name":"Home","itemCount":5},{"id":"2","name":"Garage","itemCount":2}]"#,
    );

    // Act
    let result = execute_command(&cli(Commands::Merge {
        hierarchy: hierarchy.display().to_string(),
        details: details.display().to_string(),
    }));

    // Assert
    assert!(result.is_ok());
}

#[test]
fn given_non_array_payload_when_rendering_then_tolerated_as_empty() {
    // Arrange: misbehaving backend answered with an error object
    let temp = TempDir::new().unwrap();
    let path = write_export(&temp, "tree.json", r#"{"message":"upstream timeout"}"#);

    // Act
    let result = execute_command(&cli(Commands::Tree {
        hierarchy: path.display().to_string(),
    }));

    // Assert
    assert!(result.is_ok());
}

#[test]
fn given_missing_file_when_rendering_then_errors() {
    let result = execute_command(&cli(Commands::Tree {
        hierarchy: "/nonexistent/tree.json".to_string(),
    }));

    assert!(result.is_err());
}

#[test]
fn given_no_subcommand_then_noop() {
    let result = execute_command(&Cli {
        debug: 0,
        info: false,
        generator: None,
        command: None,
    });

    assert!(result.is_ok());
}
