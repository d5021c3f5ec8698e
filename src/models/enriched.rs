//! Merged suicide + heat record

use serde::{Deserialize, Serialize};

use super::observation::Observation;
use super::types::{MonthCode, Variable};

/// A suicide record joined with its state-month heat readings
///
/// The three `*_diff` fields are deviations from the mean of the matching
/// measurement over all years at the same (State, Month), computed across
/// the joined table by [`crate::transform::join_heat`]. A missing
/// measurement yields a missing deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub state: String,
    pub year: i32,
    pub month: u32,
    pub month_code: MonthCode,
    pub deaths: f64,
    pub population: Option<f64>,
    pub suicide_rate: Option<f64>,
    pub avg_max_t: Option<f64>,
    pub avg_min_t: Option<f64>,
    pub avg_max_heat_index: Option<f64>,
    pub min_t_diff: Option<f64>,
    pub max_t_diff: Option<f64>,
    pub heat_index_diff: Option<f64>,
}

impl Observation for EnrichedRecord {
    fn state(&self) -> &str {
        &self.state
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn value(&self, var: Variable) -> Option<f64> {
        match var {
            Variable::Deaths => Some(self.deaths),
            Variable::Population => self.population,
            Variable::SuicideRate => self.suicide_rate,
            Variable::AvgMaxT => self.avg_max_t,
            Variable::AvgMinT => self.avg_min_t,
            Variable::AvgMaxHeatIndex => self.avg_max_heat_index,
            Variable::MinTDiff => self.min_t_diff,
            Variable::MaxTDiff => self.max_t_diff,
            Variable::HeatIndexDiff => self.heat_index_diff,
        }
    }

    fn is_complete(&self) -> bool {
        Variable::ALL.into_iter().all(|var| self.value(var).is_some())
    }
}
