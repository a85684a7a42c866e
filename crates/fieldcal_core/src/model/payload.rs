//! Raw upstream schedule payload shapes.

use serde_json::{Map, Value};

/// Whatever the remote source returned for a schedule.
///
/// The upstream API is not consistent about shape: some endpoints return an
/// array, some a single object, and some a JSON document embedded in a string
/// (occasionally in relaxed, single-quoted form).
#[derive(Debug, Clone, PartialEq)]
pub enum RawSchedulePayload {
    /// No payload at all (missing field, `null`, empty response).
    Absent,
    /// Array of entry-like values. Non-object elements are tolerated here and
    /// dropped during normalization.
    Sequence(Vec<Value>),
    /// One entry-like object.
    Single(Map<String, Value>),
    /// Text expected to parse as strict or relaxed JSON.
    Text(String),
    /// Numbers, booleans and anything else that cannot hold entries.
    Other(Value),
}

impl RawSchedulePayload {
    /// Classifies an already-decoded JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Single(map),
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }

    /// Wraps optional response text. `None` maps to [`RawSchedulePayload::Absent`].
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Absent,
        }
    }

    /// Classifies a raw HTTP/file response body.
    ///
    /// The body is decoded as JSON once. A body that decodes to a JSON string
    /// (`"[...]"`) passes its inner text on as [`RawSchedulePayload::Text`];
    /// a body that is not JSON at all is kept as text for relaxed recovery.
    pub fn from_response_body(body: Option<&str>) -> Self {
        let Some(body) = body else {
            return Self::Absent;
        };
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Short shape label used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Sequence(_) => "sequence",
            Self::Single(_) => "single",
            Self::Text(_) => "text",
            Self::Other(_) => "other",
        }
    }
}

impl From<Value> for RawSchedulePayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Option<Value>> for RawSchedulePayload {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Absent, Self::from_value)
    }
}
