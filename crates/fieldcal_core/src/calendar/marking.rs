//! Per-date marking derivation and entry summaries.

use crate::calendar::palette::{SchedulePalette, SeverityPalette};
use crate::calendar::severity::{highest_alert, SeverityRank};
use crate::model::schedule::ScheduleEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display metadata for one marked calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMarking {
    pub dot_color: String,
    pub marked: bool,
    pub selected: bool,
    pub selected_color: String,
}

/// Markings keyed by ISO date. Ordered so iteration follows the calendar.
pub type CalendarMarkings = BTreeMap<String, CalendarMarking>;

/// Derives one marking per distinct entry date.
///
/// Dates with weather alerts use the severity scale color of their most severe
/// alert; dates without alerts use the category dot color. When several
/// entries share a date, the last one in sequence order wins.
pub fn derive_markings(
    entries: &[ScheduleEntry],
    palette: &SchedulePalette,
    severity: &SeverityPalette,
) -> CalendarMarkings {
    let mut markings = CalendarMarkings::new();
    for entry in entries {
        let dot_color = match highest_alert(&entry.weather_alerts) {
            Some(alert) => severity
                .color_for(SeverityRank::of_level(alert.level.as_deref()))
                .to_string(),
            None => palette.dot_color.clone(),
        };
        markings.insert(
            entry.date.clone(),
            CalendarMarking {
                dot_color,
                marked: true,
                selected: true,
                selected_color: palette.selected_color.clone(),
            },
        );
    }
    markings
}

/// One-line display summary for an entry.
///
/// Format: the activity, then on a second line the icon and level of the most
/// severe alert. The second line is omitted when there are no alerts or the
/// chosen alert has neither icon nor level.
pub fn summarize(entry: &ScheduleEntry) -> String {
    let Some(alert) = highest_alert(&entry.weather_alerts) else {
        return entry.activity.clone();
    };

    let badge = [alert.icon.as_deref(), alert.level.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if badge.is_empty() {
        entry.activity.clone()
    } else {
        format!("{}\n{}", entry.activity, badge)
    }
}
