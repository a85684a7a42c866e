//! Payload normalization entry points.
//!
//! # Responsibility
//! - Turn any upstream payload shape into an ordered list of valid entries.
//! - Recover relaxed (single-quoted, unquoted-key) JSON text on a best-effort basis.
//!
//! # Invariants
//! - Normalization never returns an error and never panics on input data.
//! - Source order is preserved; incomplete entries are dropped individually.

mod normalizer;
pub mod relaxed;

pub use normalizer::{normalize, normalize_entries, normalize_text, normalize_value};
pub use relaxed::{parse_payload_text, repair_relaxed_json, PayloadParseError};
