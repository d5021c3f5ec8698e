//! Common domain type definitions
//!
//! This module contains the vocabulary types shared across the pipeline:
//! the composite state-month key, the seasonal buckets used by the
//! comparator, and the enumeration of analysable numeric variables.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StudyError;

/// A year/month key parsed from a composite code column
///
/// Both source files encode the key the same way: the first 4 characters
/// are the 4-digit year and the last 2 characters are the zero-padded
/// month, e.g. `1999/07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthCode {
    pub year: i32,
    pub month: u32,
}

impl MonthCode {
    /// Create a month code, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, StudyError> {
        if !(1..=12).contains(&month) {
            return Err(StudyError::InvalidMonthCode(format!("{year:04}/{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// First day of the month as a calendar date
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl FromStr for MonthCode {
    type Err = StudyError;

    /// Parse a composite code: first 4 characters = year, last 2 = month
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StudyError::InvalidMonthCode(s.to_string());
        if s.len() < 6 {
            return Err(invalid());
        }
        let year: i32 = s.get(..4).and_then(|y| y.parse().ok()).ok_or_else(invalid)?;
        let month: u32 = s
            .get(s.len() - 2..)
            .and_then(|m| m.parse().ok())
            .ok_or_else(invalid)?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

impl Serialize for MonthCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Seasonal bucket of a calendar month
///
/// September and October are shoulder months: they belong to neither
/// comparison cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// April through August
    Summer,
    /// November through March
    Winter,
    /// September and October
    Shoulder,
}

impl From<u32> for Season {
    fn from(month: u32) -> Self {
        match month {
            4..=8 => Self::Summer,
            9 | 10 => Self::Shoulder,
            _ => Self::Winter,
        }
    }
}

/// A numeric column of the merged table that a comparison can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Deaths,
    Population,
    SuicideRate,
    AvgMaxT,
    AvgMinT,
    AvgMaxHeatIndex,
    MinTDiff,
    MaxTDiff,
    HeatIndexDiff,
}

impl Variable {
    pub const ALL: [Self; 9] = [
        Self::Deaths,
        Self::Population,
        Self::SuicideRate,
        Self::AvgMaxT,
        Self::AvgMinT,
        Self::AvgMaxHeatIndex,
        Self::MinTDiff,
        Self::MaxTDiff,
        Self::HeatIndexDiff,
    ];

    /// Canonical snake_case column name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deaths => "deaths",
            Self::Population => "population",
            Self::SuicideRate => "suicide_rate",
            Self::AvgMaxT => "avg_max_t",
            Self::AvgMinT => "avg_min_t",
            Self::AvgMaxHeatIndex => "avg_max_heat_index",
            Self::MinTDiff => "min_t_diff",
            Self::MaxTDiff => "max_t_diff",
            Self::HeatIndexDiff => "heat_index_diff",
        }
    }

    /// Human-readable label used on chart axes and legends
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deaths => "deaths",
            Self::Population => "population",
            Self::SuicideRate => "suicide rate",
            Self::AvgMaxT => "avg max t",
            Self::AvgMinT => "avg min t",
            Self::AvgMaxHeatIndex => "avg max heat index",
            Self::MinTDiff => "min t diff",
            Self::MaxTDiff => "max t diff",
            Self::HeatIndexDiff => "heat index diff",
        }
    }
}

impl FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("Unknown variable: {s}"))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
