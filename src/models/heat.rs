//! Heat and temperature record

use serde::{Deserialize, Serialize};

use super::types::MonthCode;

/// One state-month of daily-average temperature and heat-index readings
///
/// The measurement columns carry the canonical names the rest of the
/// pipeline uses; the source file's verbose headers are renamed at load
/// time. Any measurement may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatRecord {
    pub state: String,
    pub year: i32,
    pub month: u32,
    pub month_code: MonthCode,
    /// Avg Daily Max Air Temperature (F)
    pub avg_max_t: Option<f64>,
    /// Avg Daily Min Air Temperature (F)
    pub avg_min_t: Option<f64>,
    /// Avg Daily Max Heat Index (F)
    pub avg_max_heat_index: Option<f64>,
}
