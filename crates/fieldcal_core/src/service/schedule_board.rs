//! Per-category schedule board.
//!
//! # Responsibility
//! - Hold the normalized entries and derived markings shown by one calendar.
//! - Answer day-detail queries for a tapped date.
//!
//! # Invariants
//! - `reload` replaces entries and markings wholesale; nothing is merged.
//! - Markings are always derived from the current entries.

use crate::calendar::marking::{derive_markings, summarize, CalendarMarkings};
use crate::calendar::palette::CalendarTheme;
use crate::calendar::severity::{highest_alert, SeverityRank};
use crate::model::category::ScheduleCategory;
use crate::model::payload::RawSchedulePayload;
use crate::model::schedule::ScheduleEntry;
use crate::normalize::normalize;
use log::info;
use std::collections::BTreeMap;

/// Ephemeral calendar state for one schedule category.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    category: ScheduleCategory,
    theme: CalendarTheme,
    entries: Vec<ScheduleEntry>,
    markings: CalendarMarkings,
}

impl ScheduleBoard {
    /// Creates an empty board using the built-in theme.
    pub fn new(category: ScheduleCategory) -> Self {
        Self::with_theme(category, CalendarTheme::default())
    }

    /// Creates an empty board using a caller-provided theme.
    pub fn with_theme(category: ScheduleCategory, theme: CalendarTheme) -> Self {
        Self {
            category,
            theme,
            entries: Vec::new(),
            markings: CalendarMarkings::new(),
        }
    }

    /// Replaces the board contents with a freshly fetched payload.
    ///
    /// Used for initial fetch, pull-to-refresh and "load saved schedule".
    /// Returns the number of entries now on the board.
    pub fn reload(&mut self, raw: &RawSchedulePayload) -> usize {
        let entries = normalize(raw);
        self.replace_entries(entries);
        info!(
            "event=schedule_reload module=service status=ok category={} shape={} entries={} dates={}",
            self.category,
            raw.shape(),
            self.entries.len(),
            self.markings.len()
        );
        self.entries.len()
    }

    /// Replaces the board contents with already-normalized entries.
    pub fn replace_entries(&mut self, entries: Vec<ScheduleEntry>) {
        let palette = self.theme.palette(self.category);
        self.markings = derive_markings(&entries, palette, &self.theme.severity);
        self.entries = entries;
    }

    /// Empties the board.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.markings.clear();
    }

    pub fn category(&self) -> ScheduleCategory {
        self.category
    }

    pub fn theme(&self) -> &CalendarTheme {
        &self.theme
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn markings(&self) -> &CalendarMarkings {
        &self.markings
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries scheduled on `date`, in sequence order.
    ///
    /// Unlike markings, repeated dates keep every entry here.
    pub fn entries_on(&self, date: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    /// `(date, summary)` pairs in sequence order.
    pub fn summaries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.date.clone(), summarize(entry)))
            .collect()
    }

    /// Distinct dates whose marking was driven by a warning/severe alert.
    ///
    /// Follows marking semantics: only the last entry for a date counts.
    pub fn alert_dates(&self) -> Vec<String> {
        let mut last_rank = BTreeMap::new();
        for entry in &self.entries {
            let rank = highest_alert(&entry.weather_alerts)
                .map(|alert| SeverityRank::of_level(alert.level.as_deref()));
            last_rank.insert(entry.date.as_str(), rank);
        }
        last_rank
            .into_iter()
            .filter(|(_, rank)| *rank == Some(SeverityRank::Alert))
            .map(|(date, _)| date.to_string())
            .collect()
    }
}
