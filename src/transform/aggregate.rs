//! Monthly per-state aggregation

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::{EnrichedRecord, MonthlyStateAggregate};

/// Months a state must cover to survive aggregation
const FULL_YEAR_MONTHS: usize = 12;

/// Collapse the merged table to one mean row per (Month, State)
///
/// Years are averaged out within each group; missing values are skipped
/// per field, and a field with no present values in its group stays
/// missing. States with fewer than 12 distinct months of data are then
/// removed entirely — all their months, not just the absent ones, since
/// partial coverage invalidates within-state comparison across months.
/// Output is sorted by (month, state).
#[must_use]
pub fn monthly_state_means(rows: &[EnrichedRecord]) -> Vec<MonthlyStateAggregate> {
    let groups = rows
        .iter()
        .map(|r| ((r.month, r.state.as_str()), r))
        .into_group_map();

    let mut aggregated: Vec<MonthlyStateAggregate> = groups
        .into_iter()
        .map(|((month, state), group)| MonthlyStateAggregate {
            state: state.to_string(),
            month,
            deaths: mean_of(&group, |r| Some(r.deaths)).unwrap_or(f64::NAN),
            population: mean_of(&group, |r| r.population),
            suicide_rate: mean_of(&group, |r| r.suicide_rate),
            avg_max_t: mean_of(&group, |r| r.avg_max_t),
            avg_min_t: mean_of(&group, |r| r.avg_min_t),
            avg_max_heat_index: mean_of(&group, |r| r.avg_max_heat_index),
        })
        .sorted_by(|a, b| (a.month, &a.state).cmp(&(b.month, &b.state)))
        .collect();

    // One aggregate row per (Month, State), so counting rows per state
    // counts its distinct months
    let mut months_per_state: FxHashMap<String, usize> = FxHashMap::default();
    for agg in &aggregated {
        *months_per_state.entry(agg.state.clone()).or_default() += 1;
    }
    aggregated.retain(|agg| months_per_state[&agg.state] >= FULL_YEAR_MONTHS);
    aggregated
}

fn mean_of(
    group: &[&EnrichedRecord],
    field: impl Fn(&EnrichedRecord) -> Option<f64>,
) -> Option<f64> {
    let values: Vec<f64> = group.iter().filter_map(|r| field(r)).collect();
    crate::stats::mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthCode;

    fn enriched(state: &str, year: i32, month: u32, rate: f64) -> EnrichedRecord {
        EnrichedRecord {
            state: state.to_string(),
            year,
            month,
            month_code: MonthCode::new(year, month).unwrap(),
            deaths: rate * 10.0,
            population: Some(1_000_000.0),
            suicide_rate: Some(rate),
            avg_max_t: Some(70.0),
            avg_min_t: Some(50.0),
            avg_max_heat_index: Some(75.0),
            min_t_diff: Some(0.0),
            max_t_diff: Some(0.0),
            heat_index_diff: Some(0.0),
        }
    }

    #[test]
    fn test_two_full_years_collapse_to_twelve_monthly_means() {
        let mut rows = Vec::new();
        for month in 1..=12 {
            rows.push(enriched("OH", 1999, month, 1.0));
            rows.push(enriched("OH", 2000, month, 3.0));
        }

        let by_month = monthly_state_means(&rows);
        assert_eq!(by_month.len(), 12);
        for (i, agg) in by_month.iter().enumerate() {
            assert_eq!(agg.month, i as u32 + 1);
            // Each row is the two-year mean
            assert_eq!(agg.suicide_rate, Some(2.0));
            assert_eq!(agg.deaths, 20.0);
        }
    }

    #[test]
    fn test_state_with_eleven_months_is_dropped_entirely() {
        let mut rows = Vec::new();
        for month in 1..=12 {
            rows.push(enriched("OH", 1999, month, 1.0));
        }
        // WY never reports December, in any year
        for year in [1999, 2000] {
            for month in 1..=11 {
                rows.push(enriched("WY", year, month, 2.0));
            }
        }

        let by_month = monthly_state_means(&rows);
        assert_eq!(by_month.len(), 12);
        assert!(by_month.iter().all(|agg| agg.state == "OH"));
    }

    #[test]
    fn test_missing_values_are_skipped_in_means() {
        let mut first = enriched("OH", 1999, 1, 1.0);
        first.avg_max_t = None;
        let second = enriched("OH", 2000, 1, 3.0);
        let mut rows = vec![first, second];
        for month in 2..=12 {
            rows.push(enriched("OH", 1999, month, 1.0));
        }

        let by_month = monthly_state_means(&rows);
        // January's mean comes from the one present reading
        assert_eq!(by_month[0].month, 1);
        assert_eq!(by_month[0].avg_max_t, Some(70.0));
    }

    #[test]
    fn test_output_sorted_by_month_then_state() {
        let mut rows = Vec::new();
        for month in 1..=12 {
            rows.push(enriched("WY", 1999, month, 2.0));
            rows.push(enriched("OH", 1999, month, 1.0));
        }

        let by_month = monthly_state_means(&rows);
        let keys: Vec<(u32, &str)> = by_month.iter().map(|a| (a.month, a.state.as_str())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
