use super::*;
use crate::net::types::EventRecord;

fn event(id: &str, title: &str, active: bool) -> EventRecord {
    serde_json::from_value(serde_json::json!({"_id": id, "title": title, "isActive": active})).unwrap()
}

#[test]
fn row_cells_follow_refetched_values() {
    let before = vec![event("e1", "Expo", true), event("e2", "Summit", true)];
    assert_eq!(row_cells(&before, "e1")[0], Cell::Text("Expo".to_owned()));

    let after = vec![event("e1", "Expo 2025", false), event("e2", "Summit", true)];
    let cells = row_cells(&after, "e1");
    assert_eq!(cells[0], Cell::Text("Expo 2025".to_owned()));
    assert_eq!(cells[2], Cell::Status(false));
    assert_eq!(row_cells(&after, "e2"), row_cells(&before, "e2"));
}

#[test]
fn row_cells_empty_for_unknown_id() {
    let items = vec![event("e1", "Expo", true)];
    assert!(row_cells(&items, "gone").is_empty());
}

#[test]
fn link_cells_build_for_filled_and_blank_urls() {
    let _filled = render_cell(Cell::Link("https://x.io".to_owned()));
    let _blank = render_cell(Cell::Link(String::new()));
}
