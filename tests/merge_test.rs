//! Tests for hierarchy/details merging

use loctree::{merge_details, Location};

fn node(id: &str, name: &str, children: Vec<Location>) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        children,
        ..Default::default()
    }
}

fn detail(id: &str, name: &str, item_count: u64, description: Option<&str>) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        item_count,
        description: description.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn given_matching_details_when_merging_then_metadata_applied_through_subtree() {
    // Arrange
    let hierarchy = vec![node("a", "Attic", vec![node("b", "Boxes", vec![])])];
    let details = vec![
        detail("a", "Attic", 5, None),
        detail("b", "Boxes", 2, None),
    ];

    // Act
    let merged = merge_details(&hierarchy, &details);

    // Assert
    assert_eq!(merged[0].id, "a");
    assert_eq!(merged[0].item_count, 5);
    assert_eq!(merged[0].children[0].id, "b");
    assert_eq!(merged[0].children[0].item_count, 2);
}

#[test]
fn given_node_missing_from_details_when_merging_then_defaults_apply() {
    // Arrange
    let mut only_in_hierarchy = node("b", "Boxes", vec![]);
    only_in_hierarchy.description = Some("from hierarchy".to_string());
    only_in_hierarchy.item_count = 9; // stale count carried by the payload
    let hierarchy = vec![node("a", "Attic", vec![only_in_hierarchy])];
    let details = vec![detail("a", "Attic", 5, Some("top floor"))];

    // Act
    let merged = merge_details(&hierarchy, &details);

    // Assert: absent from details means count 0, hierarchy optionals untouched
    let boxes = &merged[0].children[0];
    assert_eq!(boxes.item_count, 0);
    assert_eq!(boxes.description.as_deref(), Some("from hierarchy"));
}

#[test]
fn given_details_entry_with_children_when_merging_then_structure_from_hierarchy() {
    // Arrange: the details endpoint must never influence nesting
    let hierarchy = vec![node("a", "Attic", vec![node("b", "Boxes", vec![])])];
    let mut rogue = detail("a", "Attic", 5, None);
    rogue.children = vec![node("x", "Phantom", vec![])];
    let details = vec![rogue];

    // Act
    let merged = merge_details(&hierarchy, &details);

    // Assert
    assert_eq!(merged[0].children.len(), 1);
    assert_eq!(merged[0].children[0].id, "b");
}

#[test]
fn given_diverging_names_when_merging_then_hierarchy_wins() {
    let hierarchy = vec![node("a", "Attic", vec![])];
    let details = vec![detail("a", "Renamed elsewhere", 1, None)];

    let merged = merge_details(&hierarchy, &details);

    assert_eq!(merged[0].name, "Attic");
    assert_eq!(merged[0].item_count, 1);
}

#[test]
fn given_timestamps_in_details_when_merging_then_carried_over() {
    let hierarchy = vec![node("a", "Attic", vec![])];
    let mut entry = detail("a", "Attic", 0, Some("top floor"));
    entry.created_at = Some("2024-01-01T00:00:00Z".to_string());
    entry.updated_at = Some("2024-06-01T00:00:00Z".to_string());
    let details = vec![entry];

    let merged = merge_details(&hierarchy, &details);

    assert_eq!(merged[0].description.as_deref(), Some("top floor"));
    assert_eq!(merged[0].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(merged[0].updated_at.as_deref(), Some("2024-06-01T00:00:00Z"));
}

#[test]
fn given_multiple_roots_when_merging_then_hierarchy_order_preserved() {
    let hierarchy = vec![
        node("a", "Attic", vec![]),
        node("b", "Basement", vec![]),
        node("c", "Cellar", vec![]),
    ];
    let details = vec![detail("c", "Cellar", 3, None), detail("a", "Attic", 1, None)];

    let merged = merge_details(&hierarchy, &details);

    let ids: Vec<&str> = merged.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn given_empty_details_when_merging_then_structure_unchanged_with_zero_counts() {
    let hierarchy = vec![node("a", "Attic", vec![node("b", "Boxes", vec![])])];

    let merged = merge_details(&hierarchy, &[]);

    assert_eq!(merged[0].id, "a");
    assert_eq!(merged[0].item_count, 0);
    assert_eq!(merged[0].children[0].id, "b");
}
