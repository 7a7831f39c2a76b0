use rentscout::{FormState, Gearbox, SearchParams};
use serde_json::json;

#[test]
fn test_assembly_omits_empty_and_invalid_fields() {
    let mut form = FormState::new();
    form.location = String::new();
    form.seats = "abc".to_string();
    form.set_gearbox_input("Manual".to_string());
    form.pets_allowed = true;

    let params = SearchParams::assemble(&form);
    assert_eq!(params.location, None);
    assert_eq!(params.seats, None);
    assert_eq!(params.gearbox, Some("Manual"));
    assert!(params.pets_allowed);

    // Exact wire shape: omitted fields are absent, not null
    let record = serde_json::to_value(&params).unwrap();
    assert_eq!(record, json!({ "gearbox": "Manual", "petsAllowed": true }));
}

#[test]
fn test_assembly_forwards_all_filters() {
    let mut form = FormState::new();
    form.location = "Tallinn".to_string();
    form.seats = "5".to_string();
    form.set_gearbox_input("Automatic".to_string());

    let params = SearchParams::assemble(&form);
    let record = serde_json::to_value(&params).unwrap();
    assert_eq!(
        record,
        json!({
            "location": "Tallinn",
            "gearbox": "Automatic",
            "seats": 5,
            "petsAllowed": false
        })
    );
}

#[test]
fn test_gearbox_coercion_accepts_exact_names_only() {
    assert_eq!(Gearbox::coerce("Automatic"), Gearbox::Automatic);
    assert_eq!(Gearbox::coerce("Manual"), Gearbox::Manual);
    assert_eq!(Gearbox::coerce("manual"), Gearbox::Unset);
    assert_eq!(Gearbox::coerce("Manua"), Gearbox::Unset);
    assert_eq!(Gearbox::coerce(""), Gearbox::Unset);
}

#[test]
fn test_gearbox_recoerced_on_every_edit() {
    let mut form = FormState::new();
    form.set_gearbox_input("Manual".to_string());
    assert_eq!(form.gearbox, Gearbox::Manual);
    // One more character invalidates the filter, silently
    form.set_gearbox_input("Manualx".to_string());
    assert_eq!(form.gearbox, Gearbox::Unset);
}

#[test]
fn test_seat_parsing_is_silent() {
    for (input, expected) in [("", None), ("4", Some(4)), ("04", Some(4)), ("4x4", None), ("-2", None)] {
        let mut form = FormState::new();
        form.seats = input.to_string();
        assert_eq!(SearchParams::assemble(&form).seats, expected, "seats input {input:?}");
    }
}

#[test]
fn test_all_listings_record_is_empty_except_pets() {
    let record = serde_json::to_value(SearchParams::all_listings()).unwrap();
    assert_eq!(record, json!({ "petsAllowed": false }));
}

#[test]
fn test_date_range_is_not_forwarded() {
    use chrono::NaiveDate;
    let mut form = FormState::new();
    form.selection.select_day(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    form.selection.select_day(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

    let record = serde_json::to_value(SearchParams::assemble(&form)).unwrap();
    let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["petsAllowed"]);
}

#[test]
fn test_summary_lists_active_filters() {
    let mut form = FormState::new();
    form.location = "Tartu".to_string();
    form.seats = "7".to_string();
    let summary = SearchParams::assemble(&form).summary();
    assert!(summary.contains("location: Tartu"));
    assert!(summary.contains("seats: 7"));
    assert!(summary.contains("pets allowed: no"));
    assert!(!summary.contains("gearbox"));
}
