//! Normalized schedule entries and weather alerts.
//!
//! # Responsibility
//! - Define the canonical dated-activity record rendered by calendar views.
//! - Extract typed entries from loosely-typed JSON objects.
//!
//! # Invariants
//! - `date` and `activity` are non-empty strings for every entry produced by
//!   [`ScheduleEntry::from_object`]. Whitespace-only values count as present.
//! - Optional fields are omitted on the wire when absent.
//! - Upstream fields outside the schedule schema round-trip through `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ENTRY_FIELDS: &[&str] = &[
    "date",
    "activity",
    "notes",
    "priority",
    "idealConditions",
    "bestPractices",
    "healthTips",
    "weatherAlerts",
];

/// Activity priority as shown on the day detail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses upstream priority text.
    ///
    /// Matching is case-insensitive; `normal` is accepted as `low`. Unknown
    /// text yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" | "normal" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Weather warning attached to one schedule day.
///
/// `level` is free text ("Warning", "Severe Frost Warning", "Info", ...);
/// severity is inferred from it by `calendar::severity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl WeatherAlert {
    /// Creates an alert carrying only a level label.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            ..Self::default()
        }
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            level: text_field(object, "level"),
            icon: text_field(object, "icon"),
            description: text_field(object, "description"),
            parameter: text_field(object, "parameter"),
            message: text_field(object, "message"),
            action: text_field(object, "action"),
        }
    }
}

/// One planned activity on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// ISO `YYYY-MM-DD` key. Not validated beyond non-emptiness.
    pub date: String,
    pub activity: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_tips: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weather_alerts: Vec<WeatherAlert>,
    /// Upstream fields this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScheduleEntry {
    /// Creates an entry with only the required fields set.
    pub fn new(date: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            activity: activity.into(),
            notes: Vec::new(),
            priority: None,
            ideal_conditions: None,
            best_practices: None,
            health_tips: None,
            weather_alerts: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Extracts an entry from an entry-like JSON object.
    ///
    /// Returns `None` when `date` or `activity` is missing, not a string, or
    /// the empty string. Every other schema field is lenient: wrong types are
    /// treated as absent rather than rejecting the entry. Keys outside the
    /// schema are copied into `extra` unchanged.
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let date = required_text(object, "date")?;
        let activity = required_text(object, "activity")?;

        Some(Self {
            date,
            activity,
            notes: notes_field(object.get("notes")),
            priority: object
                .get("priority")
                .and_then(Value::as_str)
                .and_then(Priority::parse),
            ideal_conditions: text_field(object, "idealConditions"),
            best_practices: text_field(object, "bestPractices"),
            health_tips: text_field(object, "healthTips"),
            weather_alerts: alerts_field(object.get("weatherAlerts")),
            extra: object
                .iter()
                .filter(|(key, _)| !ENTRY_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        })
    }

    /// Whether this entry satisfies the date/activity presence rule.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.activity.is_empty()
    }
}

fn required_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn notes_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(note)) if !note.trim().is_empty() => vec![note.clone()],
        _ => Vec::new(),
    }
}

fn alerts_field(value: Option<&Value>) -> Vec<WeatherAlert> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(WeatherAlert::from_object)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, ScheduleEntry, WeatherAlert};
    use serde_json::json;

    #[test]
    fn priority_parse_is_case_insensitive_with_normal_alias() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse(" Medium "), Some(Priority::Medium));
        assert_eq!(Priority::parse("normal"), Some(Priority::Low));
        assert_eq!(Priority::parse("Low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn from_object_rejects_empty_or_non_string_required_fields() {
        let empty = json!({"date": "", "activity": "Water"});
        let numeric = json!({"date": 20240301, "activity": "Water"});
        let missing = json!({"date": "2024-03-01"});
        for value in [empty, numeric, missing] {
            assert!(ScheduleEntry::from_object(value.as_object().unwrap()).is_none());
        }
    }

    #[test]
    fn from_object_keeps_whitespace_only_required_fields() {
        let value = json!({"date": " ", "activity": "\t"});
        let entry = ScheduleEntry::from_object(value.as_object().unwrap())
            .expect("whitespace counts as present");
        assert_eq!(entry.date, " ");
        assert_eq!(entry.activity, "\t");
        assert!(entry.is_complete());
    }

    #[test]
    fn from_object_preserves_unknown_fields() {
        let value = json!({
            "date": "2024-03-01",
            "activity": "Plant seeds",
            "cropStage": "germination",
            "fieldId": 17
        });
        let entry = ScheduleEntry::from_object(value.as_object().unwrap()).unwrap();
        assert_eq!(entry.extra.get("cropStage"), Some(&json!("germination")));
        assert_eq!(entry.extra.get("fieldId"), Some(&json!(17)));
        assert!(!entry.extra.contains_key("date"));
        assert_eq!(serde_json::to_value(&entry).unwrap(), value);
    }

    #[test]
    fn from_object_tolerates_wrong_optional_types() {
        let value = json!({
            "date": "2024-03-01",
            "activity": "Plant seeds",
            "notes": ["Use treated seed", 7, null],
            "priority": 3,
            "idealConditions": {"temp": "20C"},
            "weatherAlerts": [{"level": "Caution", "icon": "wind"}, "storm"]
        });
        let entry = ScheduleEntry::from_object(value.as_object().unwrap()).unwrap();

        assert_eq!(entry.notes, vec!["Use treated seed".to_string()]);
        assert_eq!(entry.priority, None);
        assert_eq!(entry.ideal_conditions, None);
        assert_eq!(entry.weather_alerts.len(), 1);
        assert_eq!(entry.weather_alerts[0].icon.as_deref(), Some("wind"));
    }

    #[test]
    fn single_string_note_becomes_one_note() {
        let value = json!({"date": "2024-03-01", "activity": "Spray", "notes": "Wear gloves"});
        let entry = ScheduleEntry::from_object(value.as_object().unwrap()).unwrap();
        assert_eq!(entry.notes, vec!["Wear gloves".to_string()]);
    }

    #[test]
    fn serialization_uses_camel_case_and_skips_absent_fields() {
        let mut entry = ScheduleEntry::new("2024-03-01", "Deworm herd");
        entry.priority = Some(Priority::High);
        entry.health_tips = Some("Check weight first".to_string());
        entry.weather_alerts.push(WeatherAlert::with_level("Info"));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["healthTips"], "Check weight first");
        assert_eq!(json["weatherAlerts"][0]["level"], "Info");
        assert!(json.get("notes").is_none());
        assert!(json.get("bestPractices").is_none());
    }
}
