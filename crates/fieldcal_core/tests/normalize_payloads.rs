use fieldcal_core::{
    normalize, normalize_entries, normalize_text, normalize_value, Priority, RawSchedulePayload,
    ScheduleEntry,
};
use serde_json::json;

fn entry(date: &str, activity: &str) -> ScheduleEntry {
    ScheduleEntry::new(date, activity)
}

#[test]
fn sequence_of_valid_entries_is_returned_in_order() {
    let value = json!([
        {"date": "2024-03-01", "activity": "Plant seeds"},
        {"date": "2024-03-05", "activity": "Water"}
    ]);

    let entries = normalize_value(&value);
    assert_eq!(
        entries,
        vec![entry("2024-03-01", "Plant seeds"), entry("2024-03-05", "Water")]
    );
}

#[test]
fn relaxed_text_with_single_quotes_and_trailing_comma_is_recovered() {
    let entries = normalize_text("[{'date':'2024-03-01','activity':'Plant seeds',}]");
    assert_eq!(entries, vec![entry("2024-03-01", "Plant seeds")]);
}

#[test]
fn bare_structure_becomes_one_element_sequence() {
    let value = json!({"date": "2024-03-01", "activity": "Plant seeds"});
    assert_eq!(normalize_value(&value), vec![entry("2024-03-01", "Plant seeds")]);
}

#[test]
fn entry_missing_activity_is_dropped() {
    assert!(normalize_value(&json!([{"date": "2024-03-01"}])).is_empty());
    assert!(normalize_value(&json!({"date": "2024-03-01"})).is_empty());
}

#[test]
fn garbage_text_yields_empty_without_error() {
    assert!(normalize_text("not json at all").is_empty());
    assert!(normalize_text("{date: '10:30', activity: 'Milk'}").is_empty());
    assert!(normalize_text("[{").is_empty());
}

#[test]
fn strict_text_matches_parsed_structure() {
    let value = json!([
        {
            "date": "2024-03-01",
            "activity": "Spray fungicide",
            "notes": ["Calm morning", "Wear a mask"],
            "priority": "High",
            "weatherAlerts": [{"level": "Caution", "icon": "💨", "message": "Gusts"}]
        },
        {"date": "2024-03-04"}
    ]);
    let text = serde_json::to_string(&value).expect("encode payload");

    let from_text = normalize(&RawSchedulePayload::Text(text));
    let from_value = normalize_value(&value);
    assert_eq!(from_text, from_value);
    assert_eq!(from_text.len(), 1);
    assert_eq!(from_text[0].priority, Some(Priority::High));
}

#[test]
fn relaxed_variant_matches_canonical_form() {
    let canonical = r#"{"date": "2024-05-10", "activity": "Vaccinate flock", "priority": "normal"}"#;
    let relaxed = "{date: '2024-05-10', activity: 'Vaccinate flock', priority: 'normal',}";

    let expected = normalize_text(canonical);
    assert_eq!(normalize_text(relaxed), expected);
    assert_eq!(expected[0].priority, Some(Priority::Low));
}

#[test]
fn normalizing_normalized_output_is_identity() {
    let value = json!([
        {"date": "2024-03-01", "activity": "Plant seeds", "notes": ["Row spacing 30cm"]},
        {"activity": "no date"},
        {
            "date": "2024-03-02",
            "activity": "Irrigate",
            "bestPractices": "Water at dawn",
            "weatherAlerts": [{"level": "Info", "icon": "☀️"}]
        }
    ]);
    let once = normalize_value(&value);

    let reencoded = serde_json::to_value(&once).expect("encode entries");
    assert_eq!(normalize_value(&reencoded), once);
    assert_eq!(normalize_entries(once.clone()), once);
}

#[test]
fn absent_and_scalar_payloads_are_empty() {
    assert!(normalize(&RawSchedulePayload::Absent).is_empty());
    assert!(normalize(&RawSchedulePayload::from_text(None)).is_empty());
    assert!(normalize_value(&json!(null)).is_empty());
    assert!(normalize_value(&json!(3.5)).is_empty());
    assert!(normalize_text("42").is_empty());
    assert!(normalize_text("\"just a string\"").is_empty());
}

#[test]
fn normalizing_categories_in_parallel_is_independent() {
    let payloads = [
        json!([{"date": "2024-03-01", "activity": "Sow maize"}]),
        json!("[{'date':'2024-03-02','activity':'Deworm goats'}]"),
        json!({"date": "2024-03-03", "activity": "Clean coop"}),
    ];

    let results: Vec<Vec<ScheduleEntry>> = std::thread::scope(|scope| {
        let handles: Vec<_> = payloads
            .iter()
            .map(|payload| scope.spawn(move || normalize_value(payload)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("normalizer thread should not panic"))
            .collect()
    });

    assert_eq!(results[0], vec![entry("2024-03-01", "Sow maize")]);
    assert_eq!(results[1], vec![entry("2024-03-02", "Deworm goats")]);
    assert_eq!(results[2], vec![entry("2024-03-03", "Clean coop")]);
}
