//! Population join and rate derivation

use rustc_hash::FxHashMap;

use crate::models::{PopulationRecord, SuicideRecord};

/// Per-100,000 scale for the derived rate
const RATE_SCALE: f64 = 100_000.0;

/// Attach population and derive the suicide rate
///
/// Left join on (State, Year): every suicide record survives, and a
/// (State, Year) combination absent from the population table leaves
/// `population` and `suicide_rate` missing. Join keys are exact string
/// matches on State; normalizing formatting differences between sources
/// is the caller's responsibility.
#[must_use]
pub fn attach_population(
    suicides: &[SuicideRecord],
    population: &[PopulationRecord],
) -> Vec<SuicideRecord> {
    let by_state_year: FxHashMap<(&str, i32), f64> = population
        .iter()
        .map(|p| ((p.state.as_str(), p.year), p.population))
        .collect();

    suicides
        .iter()
        .map(|s| {
            let pop = by_state_year.get(&(s.state.as_str(), s.year)).copied();
            SuicideRecord {
                population: pop,
                suicide_rate: pop.map(|p| s.deaths / p * RATE_SCALE),
                ..s.clone()
            }
        })
        .collect()
}
