use crate::model::payload::RawSchedulePayload;
use crate::model::schedule::ScheduleEntry;
use crate::normalize::relaxed::parse_payload_text;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Normalizes any upstream payload into an ordered list of valid entries.
///
/// # Contract
/// - `Absent` and `Other` yield an empty list.
/// - `Sequence` keeps only objects with non-empty `date` and `activity`, in
///   source order.
/// - `Single` yields one entry when it qualifies, otherwise nothing.
/// - `Text` is parsed strictly, then via relaxed repair; the parsed value is
///   handled like a `Sequence` or `Single`. Any other parsed shape (including
///   a nested string) and any parse failure yield an empty list.
/// - Never returns an error and never panics on input data.
pub fn normalize(raw: &RawSchedulePayload) -> Vec<ScheduleEntry> {
    match raw {
        RawSchedulePayload::Absent => Vec::new(),
        RawSchedulePayload::Sequence(items) => entries_from_sequence(items),
        RawSchedulePayload::Single(object) => entries_from_single(object),
        RawSchedulePayload::Text(text) => entries_from_text(text),
        RawSchedulePayload::Other(value) => {
            debug!(
                "event=schedule_normalize module=normalize status=skipped shape=other kind={}",
                json_kind(value)
            );
            Vec::new()
        }
    }
}

/// Normalizes an already-decoded JSON value.
pub fn normalize_value(value: &Value) -> Vec<ScheduleEntry> {
    normalize(&RawSchedulePayload::from_value(value.clone()))
}

/// Normalizes raw response text.
pub fn normalize_text(text: &str) -> Vec<ScheduleEntry> {
    entries_from_text(text)
}

/// Re-applies the date/activity rule to typed entries.
///
/// Entries produced by [`normalize`] always pass, so this is the identity on
/// normalized output.
pub fn normalize_entries(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    entries
        .into_iter()
        .filter(ScheduleEntry::is_complete)
        .collect()
}

fn entries_from_sequence(items: &[Value]) -> Vec<ScheduleEntry> {
    let entries: Vec<ScheduleEntry> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(ScheduleEntry::from_object)
        .collect();

    let dropped = items.len() - entries.len();
    if dropped > 0 {
        debug!(
            "event=schedule_normalize module=normalize status=partial shape=sequence kept={} dropped={}",
            entries.len(),
            dropped
        );
    }
    entries
}

fn entries_from_single(object: &Map<String, Value>) -> Vec<ScheduleEntry> {
    match ScheduleEntry::from_object(object) {
        Some(entry) => vec![entry],
        None => {
            debug!(
                "event=schedule_normalize module=normalize status=partial shape=single kept=0 dropped=1"
            );
            Vec::new()
        }
    }
}

fn entries_from_text(text: &str) -> Vec<ScheduleEntry> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    match parse_payload_text(text) {
        Ok(Value::Array(items)) => entries_from_sequence(&items),
        Ok(Value::Object(object)) => entries_from_single(&object),
        Ok(other) => {
            debug!(
                "event=schedule_normalize module=normalize status=skipped shape=text kind={}",
                json_kind(&other)
            );
            Vec::new()
        }
        Err(err) => {
            warn!(
                "event=schedule_normalize module=normalize status=degraded shape=text text_len={} error={}",
                text.len(),
                err
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
