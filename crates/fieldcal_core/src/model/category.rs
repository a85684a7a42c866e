//! Schedule categories.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kind of schedule a payload belongs to. Each category has its own default
/// calendar colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleCategory {
    Crop,
    Livestock,
    Poultry,
}

impl ScheduleCategory {
    pub const ALL: [ScheduleCategory; 3] = [Self::Crop, Self::Livestock, Self::Poultry];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Livestock => "livestock",
            Self::Poultry => "poultry",
        }
    }
}

impl Display for ScheduleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleCategory {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(CategoryParseError::Empty),
            "crop" => Ok(Self::Crop),
            "livestock" => Ok(Self::Livestock),
            "poultry" => Ok(Self::Poultry),
            _ => Err(CategoryParseError::Unsupported(normalized)),
        }
    }
}

/// Category label parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unsupported(String),
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "schedule category must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "schedule category is unsupported: {value} (expected crop|livestock|poultry)"
            ),
        }
    }
}

impl Error for CategoryParseError {}
