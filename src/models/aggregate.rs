//! Per-state monthly aggregate

use serde::{Deserialize, Serialize};

use super::observation::Observation;
use super::types::Variable;

/// Mean values for one (Month, State) group across all years
///
/// Identity columns (year, month code) and the three deviation columns are
/// structurally absent: averaging a within-group deviation across years is
/// not a meaningful quantity. Only states with all 12 months of coverage
/// appear; see [`crate::transform::monthly_state_means`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStateAggregate {
    pub state: String,
    pub month: u32,
    pub deaths: f64,
    pub population: Option<f64>,
    pub suicide_rate: Option<f64>,
    pub avg_max_t: Option<f64>,
    pub avg_min_t: Option<f64>,
    pub avg_max_heat_index: Option<f64>,
}

impl Observation for MonthlyStateAggregate {
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
            // Deviation columns do not survive aggregation
            Variable::MinTDiff | Variable::MaxTDiff | Variable::HeatIndexDiff => None,
        }
    }

    fn is_complete(&self) -> bool {
        self.population.is_some()
            && self.suicide_rate.is_some()
            && self.avg_max_t.is_some()
            && self.avg_min_t.is_some()
            && self.avg_max_heat_index.is_some()
    }
}
