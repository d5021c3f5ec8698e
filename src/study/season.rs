//! Summer vs winter comparison

use crate::models::{Observation, Season, Variable};
use crate::plot::OverlayChart;
use crate::stats::{cohen_d, welch_t_test};

use super::Comparison;

/// Compare a target variable between April–August and November–March
///
/// September and October are shoulder months and land in neither cohort.
/// Rows with a missing target value are excluded from both samples. The
/// t statistic is in (summer − winter) direction and the reported
/// p-value is one-tailed — half the Welch two-tailed value, valid only
/// when the observed direction matches the hypothesized one; Cohen's d is
/// taken (winter, summer).
pub fn summer_vs_winter<T: Observation>(rows: &[T], target: Variable) -> Comparison {
    let mut summer = Vec::new();
    let mut winter = Vec::new();
    for row in rows {
        let Some(value) = row.value(target) else {
            continue;
        };
        match Season::from(row.month()) {
            Season::Summer => summer.push(value),
            Season::Winter => winter.push(value),
            Season::Shoulder => {}
        }
    }

    let test = welch_t_test(&summer, &winter);
    let d = cohen_d(&winter, &summer);

    let label = target.label();
    let title = format!(
        "{} distribution, summer v. winter months",
        capitalize(label)
    );
    let summary = [
        format!(
            "One-tailed t-test: t-statistic: {:.3}; p-value: {}",
            test.statistic,
            test.one_tailed()
        ),
        format!("Cohen's D score: {d:.3}"),
    ];
    let (n_summer, n_winter) = (summer.len(), winter.len());
    let chart = OverlayChart::new(title, label)
        .with_series("April-August", summer)
        .with_series("November-March", winter);

    Comparison::new(n_summer, n_winter, test, d, chart, summary)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnrichedRecord, MonthCode};

    fn row(month: u32, rate: f64) -> EnrichedRecord {
        EnrichedRecord {
            state: "OH".to_string(),
            year: 1999,
            month,
            month_code: MonthCode::new(1999, month).unwrap(),
            deaths: 10.0,
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
    fn test_shoulder_months_are_in_neither_cohort() {
        let rows: Vec<EnrichedRecord> = (1..=12).map(|m| row(m, m as f64)).collect();
        let comparison = summer_vs_winter(&rows, Variable::SuicideRate);
        // 5 summer months, 5 winter months, September and October dropped
        assert_eq!(comparison.n_first, 5);
        assert_eq!(comparison.n_second, 5);
        assert_eq!(comparison.n_first + comparison.n_second, rows.len() - 2);
    }

    #[test]
    fn test_effect_size_matches_direct_computation() {
        let rows: Vec<EnrichedRecord> = (1..=12).map(|m| row(m, m as f64)).collect();
        let comparison = summer_vs_winter(&rows, Variable::SuicideRate);

        let summer: Vec<f64> = (4..=8).map(f64::from).collect();
        let winter: Vec<f64> = [1, 2, 3, 11, 12].map(f64::from).to_vec();
        assert!((comparison.cohen_d - cohen_d(&winter, &summer)).abs() < 1e-12);
    }

    #[test]
    fn test_summary_lines_format() {
        let rows: Vec<EnrichedRecord> = (1..=12).map(|m| row(m, m as f64)).collect();
        let lines = summer_vs_winter(&rows, Variable::SuicideRate)
            .summary_lines()
            .clone();
        assert!(lines[0].starts_with("One-tailed t-test: t-statistic: "));
        assert!(lines[1].starts_with("Cohen's D score: "));
    }

    #[test]
    fn test_missing_target_rows_are_excluded() {
        let mut rows: Vec<EnrichedRecord> = (1..=12).map(|m| row(m, m as f64)).collect();
        rows[0].suicide_rate = None;
        let comparison = summer_vs_winter(&rows, Variable::SuicideRate);
        assert_eq!(comparison.n_second, 4);
    }

    #[test]
    fn test_chart_carries_cohort_labels() {
        let rows: Vec<EnrichedRecord> = (1..=12).map(|m| row(m, m as f64)).collect();
        let comparison = summer_vs_winter(&rows, Variable::SuicideRate);
        assert_eq!(comparison.chart.series[0].label, "April-August");
        assert_eq!(comparison.chart.series[1].label, "November-March");
        assert_eq!(
            comparison.chart.title,
            "Suicide rate distribution, summer v. winter months"
        );
    }
}
