use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

use super::reference_time;

/// Annict season, one per calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Slug used by the Annict API (`2024-autumn`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }

    /// Get season from month (1-12)
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Self::Winter),
            4..=6 => Some(Self::Spring),
            7..=9 => Some(Self::Summer),
            10..=12 => Some(Self::Autumn),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A year plus season, the unit library queries are scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonBucket {
    pub year: i32,
    pub season: Season,
}

impl SeasonBucket {
    pub fn new(year: i32, season: Season) -> Self {
        Self { year, season }
    }

    /// Season bucket containing `instant`, evaluated in the reference timezone
    pub fn containing<T: TimeZone>(instant: &DateTime<T>) -> Self {
        let local = reference_time::to_reference(instant);
        // from_month only fails outside 1..=12, which chrono never yields
        let season = Season::from_month(local.month()).unwrap_or(Season::Winter);
        Self::new(local.year(), season)
    }

    /// Annict season filter value, e.g. `2024-autumn`
    pub fn to_annict_slug(&self) -> String {
        format!("{}-{}", self.year, self.season)
    }
}

impl fmt::Display for SeasonBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.season)
    }
}
