//! Calendar presentation state derived from normalized entries.
//!
//! # Responsibility
//! - Rank free-text weather alert levels.
//! - Derive per-date marking metadata and one-line entry summaries.
//!
//! # Invariants
//! - Severity ranking is monotonic: warning/severe > caution/moderate > other.
//! - Markings hold exactly one record per distinct entry date (last write wins).

pub mod marking;
pub mod palette;
pub mod severity;

pub use marking::{derive_markings, summarize, CalendarMarking, CalendarMarkings};
pub use palette::{CalendarTheme, SchedulePalette, SeverityPalette, ThemeError};
pub use severity::{highest_alert, severity_rank, SeverityRank};
