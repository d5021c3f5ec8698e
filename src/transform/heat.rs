//! Heat join and grouped-mean deviations

use rustc_hash::FxHashMap;

use crate::models::{EnrichedRecord, HeatRecord, MonthCode, SuicideRecord};

/// Running mean of an optionally-missing measurement
#[derive(Debug, Default, Clone, Copy)]
struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Group means of the three heat measurements at one (State, Month)
#[derive(Debug, Default, Clone, Copy)]
struct GroupMeans {
    avg_max_t: MeanAcc,
    avg_min_t: MeanAcc,
    avg_max_heat_index: MeanAcc,
}

/// Join heat readings onto suicide records and compute seasonal deviations
///
/// Inner join on (State, MonthCode): suicide rows with no matching heat
/// reading are dropped. The three deviation columns are then computed in
/// two passes over the joined result — first a map from (State, Month) to
/// the mean of each measurement across all years, then a subtraction per
/// row. Means skip missing measurements, and a missing measurement yields
/// a missing deviation.
#[must_use]
pub fn join_heat(suicides: &[SuicideRecord], heat: &[HeatRecord]) -> Vec<EnrichedRecord> {
    let by_state_code: FxHashMap<(&str, MonthCode), &HeatRecord> = heat
        .iter()
        .map(|h| ((h.state.as_str(), h.month_code), h))
        .collect();

    let mut joined: Vec<EnrichedRecord> = suicides
        .iter()
        .filter_map(|s| {
            let h = by_state_code.get(&(s.state.as_str(), s.month_code))?;
            Some(EnrichedRecord {
                state: s.state.clone(),
                year: s.year,
                month: s.month,
                month_code: s.month_code,
                deaths: s.deaths,
                population: s.population,
                suicide_rate: s.suicide_rate,
                avg_max_t: h.avg_max_t,
                avg_min_t: h.avg_min_t,
                avg_max_heat_index: h.avg_max_heat_index,
                min_t_diff: None,
                max_t_diff: None,
                heat_index_diff: None,
            })
        })
        .collect();

    // Pass 1: per-(State, Month) means across the joined result
    let mut groups: FxHashMap<(String, u32), GroupMeans> = FxHashMap::default();
    for row in &joined {
        let group = groups.entry((row.state.clone(), row.month)).or_default();
        group.avg_max_t.push(row.avg_max_t);
        group.avg_min_t.push(row.avg_min_t);
        group.avg_max_heat_index.push(row.avg_max_heat_index);
    }

    // Pass 2: subtract the group mean from each present measurement
    for row in &mut joined {
        let group = &groups[&(row.state.clone(), row.month)];
        row.max_t_diff = deviation(row.avg_max_t, group.avg_max_t.mean());
        row.min_t_diff = deviation(row.avg_min_t, group.avg_min_t.mean());
        row.heat_index_diff = deviation(row.avg_max_heat_index, group.avg_max_heat_index.mean());
    }

    joined
}

fn deviation(value: Option<f64>, group_mean: Option<f64>) -> Option<f64> {
    Some(value? - group_mean?)
}
