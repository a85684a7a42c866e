//! Relaxed JSON text recovery.
//!
//! The repair is a plain textual rewrite, not a parser. Known limitations:
//! - string values containing `'`, `"` or `word:` sequences (e.g. `"10:30"`)
//!   are corrupted by the rewrite and usually fail to parse afterwards;
//! - a comma inside a string value directly before `}` or `]` text is removed.
//!
//! Callers treat a failed recovery as "no entries".

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

static BARE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*:").expect("valid bare key regex"));
static TRAILING_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("valid trailing comma regex"));

/// Payload text could not be parsed, even after relaxed repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadParseError {
    /// Strict `serde_json` failure on the original text.
    pub strict: String,
    /// Strict failure on the repaired text.
    pub relaxed: String,
}

impl Display for PayloadParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "schedule payload is not valid JSON: strict parse failed ({}); relaxed parse failed ({})",
            self.strict, self.relaxed
        )
    }
}

impl Error for PayloadParseError {}

/// Rewrites relaxed JSON-like text towards strict JSON.
///
/// Steps, in order:
/// 1. every `'` becomes `"`;
/// 2. every `word:` / `word :` becomes `"word":`;
/// 3. commas directly before `}` or `]` (ignoring whitespace) are removed.
///
/// Already-quoted keys are untouched because the closing quote sits between
/// the word and the colon.
pub fn repair_relaxed_json(text: &str) -> String {
    let quoted = text.replace('\'', "\"");
    let keyed = BARE_KEY_RE.replace_all(&quoted, "\"$1\":");
    TRAILING_COMMA_RE.replace_all(&keyed, "$1").into_owned()
}

/// Parses payload text strictly, falling back to [`repair_relaxed_json`].
pub fn parse_payload_text(text: &str) -> Result<Value, PayloadParseError> {
    let strict = match serde_json::from_str::<Value>(text) {
        Ok(value) => return Ok(value),
        Err(err) => err.to_string(),
    };

    let repaired = repair_relaxed_json(text);
    serde_json::from_str::<Value>(&repaired).map_err(|err| PayloadParseError {
        strict,
        relaxed: err.to_string(),
    })
}
