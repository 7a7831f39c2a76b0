use chrono::NaiveDate;
use rentscout::search::{highlight_map, SelectionState};

const BLUE: &str = "#007AFF";
const WHITE: &str = "#ffffff";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_selection_marks_nothing() {
    let marked = highlight_map(&SelectionState::new(), BLUE, WHITE);
    assert!(marked.is_empty());
}

#[test]
fn test_partial_start_marks_opening_boundary_only() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));

    let marked = highlight_map(&selection, BLUE, WHITE);
    assert_eq!(marked.len(), 1);
    let mark = &marked["2024-06-10"];
    assert!(mark.selected);
    assert!(mark.is_range_start);
    assert!(!mark.is_range_end);
}

#[test]
fn test_complete_range_marks_both_boundaries() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 15));

    let marked = highlight_map(&selection, BLUE, WHITE);
    assert_eq!(marked.len(), 2);
    assert!(marked["2024-06-10"].is_range_start);
    assert!(!marked["2024-06-10"].is_range_end);
    assert!(marked["2024-06-15"].is_range_end);
    assert!(!marked["2024-06-15"].is_range_start);
    // Interior days are computed, never stored
    assert!(!marked.contains_key("2024-06-12"));
}

#[test]
fn test_single_day_range_is_both_boundaries() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 10));

    let marked = highlight_map(&selection, BLUE, WHITE);
    assert_eq!(marked.len(), 1);
    let mark = &marked["2024-06-10"];
    assert!(mark.is_range_start);
    assert!(mark.is_range_end);
}

#[test]
fn test_descriptor_wire_shape() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));

    let marked = highlight_map(&selection, BLUE, WHITE);
    let descriptor = serde_json::to_value(&marked["2024-06-10"]).unwrap();
    assert_eq!(descriptor["selected"], true);
    assert_eq!(descriptor["isRangeStart"], true);
    assert_eq!(descriptor["color"], BLUE);
    assert_eq!(descriptor["textColor"], WHITE);
    // False boundary tags are omitted from the record
    assert!(descriptor.get("isRangeEnd").is_none());
}

#[test]
fn test_colors_come_from_caller() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));

    let marked = highlight_map(&selection, "#112233", "#445566");
    assert_eq!(marked["2024-06-10"].color, "#112233");
    assert_eq!(marked["2024-06-10"].text_color, "#445566");
}
