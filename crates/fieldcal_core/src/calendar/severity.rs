//! Weather alert severity ranking.

use crate::model::schedule::WeatherAlert;

/// Rank inferred from a free-text alert level. Higher is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityRank {
    /// Anything unrecognized, including a missing level.
    Safe = 1,
    /// Level mentions `caution` or `moderate`.
    Caution = 2,
    /// Level mentions `warning` or `severe`.
    Alert = 3,
}

impl SeverityRank {
    /// Classifies level text by case-insensitive substring match.
    pub fn of_level(level: Option<&str>) -> Self {
        let Some(level) = level else {
            return Self::Safe;
        };
        let lowered = level.to_lowercase();
        if lowered.contains("warning") || lowered.contains("severe") {
            Self::Alert
        } else if lowered.contains("caution") || lowered.contains("moderate") {
            Self::Caution
        } else {
            Self::Safe
        }
    }

    /// Numeric score in `1..=3`.
    pub fn score(self) -> u8 {
        self as u8
    }
}

/// Numeric severity score for a level label.
pub fn severity_rank(level: Option<&str>) -> u8 {
    SeverityRank::of_level(level).score()
}

/// Returns the most severe alert; ties keep the first one encountered.
pub fn highest_alert(alerts: &[WeatherAlert]) -> Option<&WeatherAlert> {
    let mut best: Option<(&WeatherAlert, SeverityRank)> = None;
    for alert in alerts {
        let rank = SeverityRank::of_level(alert.level.as_deref());
        match best {
            Some((_, best_rank)) if rank <= best_rank => {}
            _ => best = Some((alert, rank)),
        }
    }
    best.map(|(alert, _)| alert)
}
