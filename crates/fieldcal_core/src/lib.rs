//! Core schedule logic for FieldCal.
//! This crate turns loosely-typed farm schedule payloads into calendar state.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod service;

pub use calendar::{
    derive_markings, highest_alert, severity_rank, summarize, CalendarMarking, CalendarMarkings,
    CalendarTheme, SchedulePalette, SeverityPalette, SeverityRank, ThemeError,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{CategoryParseError, ScheduleCategory};
pub use model::payload::RawSchedulePayload;
pub use model::schedule::{Priority, ScheduleEntry, WeatherAlert};
pub use normalize::{
    normalize, normalize_entries, normalize_text, normalize_value, parse_payload_text,
    repair_relaxed_json, PayloadParseError,
};
pub use service::schedule_board::ScheduleBoard;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
