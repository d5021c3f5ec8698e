//! Suicide mortality record

use serde::{Deserialize, Serialize};

use super::types::MonthCode;

/// One state-month of suicide mortality
///
/// Population and the derived rate are attached by
/// [`crate::transform::attach_population`]; a (State, Year) combination
/// absent from the population table leaves both fields `None` — they are
/// never zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuicideRecord {
    pub state: String,
    pub year: i32,
    /// Calendar month 1-12, taken from the trailing characters of the
    /// source's month code column
    pub month: u32,
    pub month_code: MonthCode,
    pub deaths: f64,
    pub population: Option<f64>,
    /// Deaths per 100,000 population
    pub suicide_rate: Option<f64>,
}
