//! State population record

use serde::{Deserialize, Serialize};

/// Annual population of one state; join source for the rate derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub state: String,
    pub year: i32,
    pub population: f64,
}
