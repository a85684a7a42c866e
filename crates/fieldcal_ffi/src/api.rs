//! FFI use-case API for the mobile calendar screens.
//!
//! # Responsibility
//! - Expose schedule normalization and calendar marking to Dart via FRB.
//! - Accept payloads exactly as the host's HTTP client received them.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Bad payloads produce an empty response, never an error.

use fieldcal_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner, summarize, CalendarTheme,
    RawSchedulePayload, ScheduleBoard, ScheduleCategory, ScheduleEntry,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
/// Safe to call repeatedly with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Log level the host should pass to [`init_logging`] by default.
///
/// `debug` for debug builds of the native library, `info` for release builds.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// One schedule row for the day detail list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    /// ISO `YYYY-MM-DD` date key.
    pub date: String,
    pub activity: String,
    /// Activity plus the most severe alert badge, newline separated.
    pub summary: String,
    /// `high|medium|low` when present.
    pub priority: Option<String>,
    pub notes: Vec<String>,
    /// Full normalized entry as JSON for detail sheets.
    pub entry_json: String,
}

/// Marking for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedDate {
    pub date: String,
    pub dot_color: String,
    pub selected_color: String,
    pub marked: bool,
    pub selected: bool,
}

/// Response envelope for one schedule load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCalendarResponse {
    /// Effective category label.
    pub category: String,
    pub items: Vec<ScheduleItem>,
    /// Sorted by date.
    pub marked_dates: Vec<MarkedDate>,
    /// Dates whose marking comes from a warning/severe alert.
    pub alert_dates: Vec<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl ScheduleCalendarResponse {
    fn failure(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: Vec::new(),
            marked_dates: Vec::new(),
            alert_dates: Vec::new(),
            message: message.into(),
        }
    }
}

/// Normalizes a schedule payload and derives its calendar state.
///
/// Input semantics:
/// - `category`: `crop|livestock|poultry` (case-insensitive).
/// - `payload`: raw response body or field value; JSON arrays, objects,
///   JSON-encoded strings and relaxed JSON text are all accepted.
/// - `theme_json`: optional calendar theme override.
///
/// # FFI contract
/// - Sync call, CPU-only.
/// - Never panics; unknown category or invalid theme are reported in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn load_schedule_calendar(
    category: String,
    payload: Option<String>,
    theme_json: Option<String>,
) -> ScheduleCalendarResponse {
    let category = match category.parse::<ScheduleCategory>() {
        Ok(category) => category,
        Err(err) => return ScheduleCalendarResponse::failure(category, err.to_string()),
    };
    let theme = match theme_json.as_deref().map(CalendarTheme::from_json) {
        Some(Ok(theme)) => theme,
        Some(Err(err)) => {
            return ScheduleCalendarResponse::failure(category.as_str(), err.to_string())
        }
        None => CalendarTheme::default(),
    };

    let mut board = ScheduleBoard::with_theme(category, theme);
    board.reload(&RawSchedulePayload::from_response_body(payload.as_deref()));
    to_response(&board)
}

/// Returns the summary line for one normalized entry JSON.
///
/// Returns an empty string when `entry_json` is not a valid entry.
#[flutter_rust_bridge::frb(sync)]
pub fn summarize_entry(entry_json: String) -> String {
    match serde_json::from_str::<ScheduleEntry>(&entry_json) {
        Ok(entry) if entry.is_complete() => summarize(&entry),
        Ok(_) => String::new(),
        Err(err) => {
            warn!("event=summarize_entry module=ffi status=error error={err}");
            String::new()
        }
    }
}

fn to_response(board: &ScheduleBoard) -> ScheduleCalendarResponse {
    let items = board
        .entries()
        .iter()
        .map(to_schedule_item)
        .collect::<Vec<_>>();
    let marked_dates = board
        .markings()
        .iter()
        .map(|(date, marking)| MarkedDate {
            date: date.clone(),
            dot_color: marking.dot_color.clone(),
            selected_color: marking.selected_color.clone(),
            marked: marking.marked,
            selected: marking.selected,
        })
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No schedule entries.".to_string()
    } else {
        format!(
            "Loaded {} entr{} across {} date(s).",
            items.len(),
            if items.len() == 1 { "y" } else { "ies" },
            marked_dates.len()
        )
    };

    ScheduleCalendarResponse {
        category: board.category().as_str().to_string(),
        items,
        marked_dates,
        alert_dates: board.alert_dates(),
        message,
    }
}

fn to_schedule_item(entry: &ScheduleEntry) -> ScheduleItem {
    ScheduleItem {
        date: entry.date.clone(),
        activity: entry.activity.clone(),
        summary: summarize(entry),
        priority: entry.priority.map(|priority| priority.as_str().to_string()),
        notes: entry.notes.clone(),
        entry_json: serde_json::to_string(entry).unwrap_or_default(),
    }
}
