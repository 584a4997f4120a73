use super::*;
use crate::net::transport::{FormPart, RequestBody};
use crate::resource::EditMode;

// =============================================================
// Helpers
// =============================================================

fn speaker() -> Speaker {
    serde_json::from_value(serde_json::json!({
        "_id": "s1",
        "type": "speaker",
        "name": "Ada",
        "phone": "555",
        "email": "ada@example.com",
        "youTubeLink": "yt",
        "instagramLink": "ig",
        "TwitterLink": "tw",
        "LinkedinLink": "li",
        "BioGraphy": "Mathematician",
        "registeredAt": "Keynote",
        "isActive": true,
        "img": "uploads/ada.png",
        "createdAt": "2024-02-03T00:00:00.000Z"
    }))
    .unwrap()
}

fn plan() -> PricePlan {
    serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "eventMasterItem": {"_id": "e1", "title": "Expo"},
        "titleTop": "Best value",
        "title": "Gold",
        "price": 4999,
        "paymentLink": "https://pay",
        "slots": "20",
        "offerings": [{"description": "Lunch"}],
        "isActive": false
    }))
    .unwrap()
}

fn update(id: &str) -> EditMode {
    EditMode::Update { id: id.to_owned() }
}

fn multipart_parts(body: RequestBody) -> Vec<FormPart> {
    match body {
        RequestBody::Multipart(parts) => parts,
        other => panic!("expected multipart, got {other:?}"),
    }
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn speaker_draft_prefills_every_schema_field() {
    let speaker = speaker();
    let draft = speaker.to_draft();
    assert_eq!(draft.text("type"), "speaker");
    assert_eq!(draft.text("name"), "Ada");
    assert_eq!(draft.text("phone"), "555");
    assert_eq!(draft.text("email"), "ada@example.com");
    assert_eq!(draft.text("youTubeLink"), "yt");
    assert_eq!(draft.text("instagramLink"), "ig");
    assert_eq!(draft.text("TwitterLink"), "tw");
    assert_eq!(draft.text("LinkedinLink"), "li");
    assert_eq!(draft.text("BioGraphy"), "Mathematician");
    assert_eq!(draft.text("registeredAt"), "Keynote");
    assert!(draft.flag("isActive"));
    assert_eq!(draft.image_preview("image").as_deref(), Some("/uploads/ada.png"));

    for field in Speaker::SCHEMA.iter().filter(|f| f.applies_to(&update("s1"))) {
        if !matches!(field.kind, FieldKind::Image) {
            assert!(draft.value(field.key).is_some(), "missing prefill for {}", field.key);
        }
    }
}

#[test]
fn event_draft_trims_dates_for_inputs() {
    let event: EventRecord = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "title": "Expo",
        "startDate": "2024-05-01T00:00:00.000Z",
        "endDate": "2024-05-03T00:00:00.000Z",
        "isActive": true
    }))
    .unwrap();
    let draft = event.to_draft();
    assert_eq!(draft.text("startDate"), "2024-05-01");
    assert_eq!(draft.text("endDate"), "2024-05-03");
}

#[test]
fn venue_draft_uses_event_id() {
    let venue: Venue =
        serde_json::from_value(serde_json::json!({"_id": "v1", "eventMasterItem": {"_id": "e9", "title": "Expo"}}))
            .unwrap();
    assert_eq!(venue.to_draft().text("eventMasterItem"), "e9");
}

#[test]
fn price_plan_draft_carries_offerings() {
    let draft = plan().to_draft();
    assert_eq!(draft.text("eventMasterItem"), "e1");
    assert_eq!(draft.text("price"), "4999");
    assert_eq!(draft.rows("offerings").len(), 1);
    assert_eq!(draft.rows("offerings")[0]["description"], "Lunch");
}

// =============================================================
// Encoding through the catalog
// =============================================================

#[test]
fn toggling_active_changes_only_that_field() {
    let plan = plan();
    let before = plan.to_draft();
    let mut after = before.clone();
    after.set_flag("isActive", true);

    let mode = update("p1");
    let RequestBody::Json(before) = before.encode(PricePlan::SCHEMA, &mode, PricePlan::UPDATE_BODY).unwrap() else {
        panic!("expected json")
    };
    let RequestBody::Json(after) = after.encode(PricePlan::SCHEMA, &mode, PricePlan::UPDATE_BODY).unwrap() else {
        panic!("expected json")
    };

    let before = before.as_object().unwrap();
    let after = after.as_object().unwrap();
    assert_eq!(before.len(), after.len());
    for (key, value) in before {
        if key == "isActive" {
            assert_eq!(value, &serde_json::json!(false));
            assert_eq!(after[key], serde_json::json!(true));
        } else {
            assert_eq!(&after[key], value, "field {key} changed");
        }
    }
}

#[test]
fn price_plan_update_body_is_typed_json() {
    let body = plan().to_draft().encode(PricePlan::SCHEMA, &update("p1"), PricePlan::UPDATE_BODY).unwrap();
    assert_eq!(
        body,
        RequestBody::Json(serde_json::json!({
            "eventMasterItem": "e1",
            "titleTop": "Best value",
            "title": "Gold",
            "price": 4999,
            "paymentLink": "https://pay",
            "slots": "20",
            "offerings": [{"description": "Lunch"}],
            "isActive": false
        }))
    );
}

#[test]
fn event_update_is_json_without_image() {
    assert_eq!(EventRecord::body_kind(&update("e1")), BodyKind::Json);
    assert_eq!(EventRecord::body_kind(&EditMode::Create), BodyKind::Multipart);
    let event: EventRecord = serde_json::from_value(serde_json::json!({"_id": "e1", "image": "a.png"})).unwrap();
    let RequestBody::Json(body) = event.to_draft().encode(EventRecord::SCHEMA, &update("e1"), BodyKind::Json).unwrap()
    else {
        panic!("expected json")
    };
    assert!(body.get("image").is_none());
}

#[test]
fn venue_create_sends_offerings_as_json_text() {
    let mut draft = Draft::blank(Venue::SCHEMA, &EditMode::Create);
    draft.set_text("city", "Pune");
    draft.set_row_cell("offerings", 0, "price", "100");
    let parts = multipart_parts(draft.encode(Venue::SCHEMA, &EditMode::Create, Venue::CREATE_BODY).unwrap());
    let offerings = parts.iter().find(|p| p.name() == "offerings").unwrap();
    let decoded: serde_json::Value = serde_json::from_str(offerings.text().unwrap()).unwrap();
    assert_eq!(decoded, serde_json::json!([{"startDate": "", "endDate": "", "price": 100}]));

    let parts = multipart_parts(
        Draft::blank(Venue::SCHEMA, &update("v1")).encode(Venue::SCHEMA, &update("v1"), Venue::UPDATE_BODY).unwrap(),
    );
    assert!(parts.iter().all(|p| p.name() != "offerings"));
}

// =============================================================
// Table cells
// =============================================================

#[test]
fn cells_match_column_count() {
    assert_eq!(speaker().cells().len(), Speaker::COLUMNS.len());
    assert_eq!(plan().cells().len(), PricePlan::COLUMNS.len());
    let registration: Registration = serde_json::from_value(serde_json::json!({"data": "{}"})).unwrap();
    assert_eq!(registration.cells().len(), Registration::COLUMNS.len());
    let inquiry: Inquiry = serde_json::from_value(serde_json::json!({"website": "https://x.io"})).unwrap();
    assert_eq!(inquiry.cells().len(), Inquiry::COLUMNS.len());
    assert!(inquiry.cells().contains(&Cell::Link("https://x.io".to_owned())));
}

#[test]
fn event_reference_cell_falls_back_to_na() {
    let venue: Venue = serde_json::from_value(serde_json::json!({"_id": "v1"})).unwrap();
    assert_eq!(venue.cells()[1], Cell::Text("N/A".to_owned()));
    let bare: Venue = serde_json::from_value(serde_json::json!({"_id": "v2", "eventMasterItem": "65f0abc"})).unwrap();
    assert_eq!(bare.cells()[1], Cell::Text("N/A".to_owned()));
    let untitled: Venue =
        serde_json::from_value(serde_json::json!({"_id": "v3", "eventMasterItem": {"_id": "e1", "title": " "}})).unwrap();
    assert_eq!(untitled.cells()[1], Cell::Text("N/A".to_owned()));
    assert_eq!(plan().cells()[0], Cell::Text("Expo".to_owned()));
}

#[test]
fn registration_cells_join_lists() {
    let registration: Registration = serde_json::from_value(serde_json::json!({
        "data": r#"{"first_name":"Grace","market_traded":["Equity","FX"]}"#,
        "createdAt": "2024-03-04T10:11:12.000Z"
    }))
    .unwrap();
    let cells = registration.cells();
    assert_eq!(cells[0], Cell::Text("Grace".to_owned()));
    assert_eq!(cells[11], Cell::Text("Equity, FX".to_owned()));
    assert_eq!(cells[15], Cell::Text(display_timestamp(Some("2024-03-04T10:11:12.000Z"))));
}

#[test]
fn capabilities_per_resource() {
    assert_eq!(Registration::CAPABILITIES, Capabilities::READ_ONLY);
    assert_eq!(HomeContent::CAPABILITIES, Capabilities::EDIT_ONLY);
    assert!(HomeContent::SINGLETON);
    assert_eq!(Venue::AFTER_DELETE, AfterDelete::Prune);
    assert_eq!(Speaker::AFTER_DELETE, AfterDelete::Refetch);
    assert!(Venue::has_event_field());
    assert!(!Speaker::has_event_field());
}
