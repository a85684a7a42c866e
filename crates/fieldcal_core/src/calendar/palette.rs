//! Calendar color tokens.
//!
//! # Invariants
//! - Every color token in a validated theme is non-empty.
//! - Each schedule category has its own default dot/selected pair.

use crate::calendar::severity::SeverityRank;
use crate::model::category::ScheduleCategory;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default marking colors for one schedule category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePalette {
    /// Dot color for dates without weather alerts.
    pub dot_color: String,
    /// Highlight color for every marked date.
    pub selected_color: String,
}

impl SchedulePalette {
    pub fn new(dot_color: impl Into<String>, selected_color: impl Into<String>) -> Self {
        Self {
            dot_color: dot_color.into(),
            selected_color: selected_color.into(),
        }
    }

    /// Built-in palette for a category.
    pub fn for_category(category: ScheduleCategory) -> Self {
        match category {
            ScheduleCategory::Crop => Self::new("#2E7D32", "#C8E6C9"),
            ScheduleCategory::Livestock => Self::new("#6D4C41", "#D7CCC8"),
            ScheduleCategory::Poultry => Self::new("#F9A825", "#FFF9C4"),
        }
    }
}

/// Fixed three-step scale used when a date carries weather alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityPalette {
    pub alert: String,
    pub caution: String,
    pub safe: String,
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            alert: "#D32F2F".to_string(),
            caution: "#FFA000".to_string(),
            safe: "#388E3C".to_string(),
        }
    }
}

impl SeverityPalette {
    pub fn color_for(&self, rank: SeverityRank) -> &str {
        match rank {
            SeverityRank::Alert => &self.alert,
            SeverityRank::Caution => &self.caution,
            SeverityRank::Safe => &self.safe,
        }
    }
}

/// Complete color configuration for calendar markings.
///
/// Hosts may ship a JSON theme; missing sections fall back to built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarTheme {
    pub severity: SeverityPalette,
    pub crop: SchedulePalette,
    pub livestock: SchedulePalette,
    pub poultry: SchedulePalette,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self {
            severity: SeverityPalette::default(),
            crop: SchedulePalette::for_category(ScheduleCategory::Crop),
            livestock: SchedulePalette::for_category(ScheduleCategory::Livestock),
            poultry: SchedulePalette::for_category(ScheduleCategory::Poultry),
        }
    }
}

impl CalendarTheme {
    /// Parses and validates a JSON theme document.
    ///
    /// # Errors
    /// - [`ThemeError::Json`] when the document is not a valid theme object.
    /// - [`ThemeError::EmptyColor`] when any color token is blank.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(text).map_err(ThemeError::Json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Checks every color token is non-empty.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let tokens = [
            ("severity.alert", &self.severity.alert),
            ("severity.caution", &self.severity.caution),
            ("severity.safe", &self.severity.safe),
            ("crop.dotColor", &self.crop.dot_color),
            ("crop.selectedColor", &self.crop.selected_color),
            ("livestock.dotColor", &self.livestock.dot_color),
            ("livestock.selectedColor", &self.livestock.selected_color),
            ("poultry.dotColor", &self.poultry.dot_color),
            ("poultry.selectedColor", &self.poultry.selected_color),
        ];
        for (name, value) in tokens {
            if value.trim().is_empty() {
                return Err(ThemeError::EmptyColor(name));
            }
        }
        Ok(())
    }

    pub fn palette(&self, category: ScheduleCategory) -> &SchedulePalette {
        match category {
            ScheduleCategory::Crop => &self.crop,
            ScheduleCategory::Livestock => &self.livestock,
            ScheduleCategory::Poultry => &self.poultry,
        }
    }
}

/// Theme document errors.
#[derive(Debug)]
pub enum ThemeError {
    Json(serde_json::Error),
    EmptyColor(&'static str),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid calendar theme: {err}"),
            Self::EmptyColor(name) => write!(f, "calendar theme color must not be empty: {name}"),
        }
    }
}

impl Error for ThemeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::EmptyColor(_) => None,
        }
    }
}
