//! Top vs bottom percentile comparison

use crate::error::{Result, StudyError};
use crate::models::{Observation, Variable};
use crate::plot::OverlayChart;
use crate::stats::{cohen_d, quantile, welch_t_test};

use super::Comparison;

/// Legend wording when the covariate is a heat deviation
pub const UNUSUAL_HEAT: &str = "unusual heat";

/// Compare a target variable between the top and bottom tails of a covariate
///
/// Rows with any missing value are dropped first. The cohorts are
/// `var >= quantile(1 - percentile)` and `var <= quantile(percentile)` —
/// inclusive on both sides, so repeated values exactly at a quantile
/// boundary can land in both cohorts, and the two cohorts together need
/// not cover the data. The t statistic is in (top − bottom) direction with
/// a one-tailed p-value; Cohen's d is taken (bottom, top).
///
/// `percentile` must be in (0, 0.5]; above 0.5 the upper and lower
/// cohorts would swap roles, so that is rejected as an error.
pub fn top_vs_bottom<T: Observation>(
    percentile: f64,
    rows: &[T],
    var: Variable,
    target: Variable,
    var_name: &str,
) -> Result<Comparison> {
    if !(percentile > 0.0 && percentile <= 0.5) {
        return Err(StudyError::InvalidPercentile(percentile));
    }

    let complete: Vec<&T> = rows.iter().filter(|r| r.is_complete()).collect();
    let covariate: Vec<f64> = complete.iter().filter_map(|r| r.value(var)).collect();
    let q_top = quantile(&covariate, 1.0 - percentile).unwrap_or(f64::NAN);
    let q_bottom = quantile(&covariate, percentile).unwrap_or(f64::NAN);

    let cohort = |keep: &dyn Fn(f64) -> bool| -> Vec<f64> {
        complete
            .iter()
            .filter(|r| r.value(var).is_some_and(|v| keep(v)))
            .filter_map(|r| r.value(target))
            .collect()
    };
    let top = cohort(&|v| v >= q_top);
    let bottom = cohort(&|v| v <= q_bottom);

    let test = welch_t_test(&top, &bottom);
    let d = cohen_d(&bottom, &top);

    let summary = [
        format!(
            "One-tailed t-test: t-statistic: {:.3}; p-value: {:.6}",
            test.statistic,
            test.one_tailed()
        ),
        format!("Cohen's d: {d:.3}"),
    ];
    let (n_top, n_bottom) = (top.len(), bottom.len());
    let chart = OverlayChart::new(
        format!("{} by {} percentile", target.label(), var_name),
        target.label(),
    )
    .with_series(
        format!("{:.0}th percentile\n{var_name}", (1.0 - percentile) * 100.0),
        top,
    )
    .with_series(
        format!("{:.0}th percentile\n{var_name}", percentile * 100.0),
        bottom,
    );

    Ok(Comparison::new(n_top, n_bottom, test, d, chart, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnrichedRecord, MonthCode};

    fn row(month: u32, heat_index_diff: f64, rate: f64) -> EnrichedRecord {
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
            heat_index_diff: Some(heat_index_diff),
        }
    }

    fn fixture() -> Vec<EnrichedRecord> {
        // Covariate runs 0..100, target tracks it with an offset
        (0..100)
            .map(|i| row(i % 12 + 1, f64::from(i), f64::from(i) / 10.0))
            .collect()
    }

    #[test]
    fn test_percentile_above_half_is_rejected() {
        let rows = fixture();
        let err = top_vs_bottom(
            0.6,
            &rows,
            Variable::HeatIndexDiff,
            Variable::SuicideRate,
            UNUSUAL_HEAT,
        )
        .err()
        .unwrap();
        assert!(matches!(err, StudyError::InvalidPercentile(p) if p == 0.6));
    }

    #[test]
    fn test_cohorts_are_inclusive_tails() {
        let rows = fixture();
        let comparison = top_vs_bottom(
            0.1,
            &rows,
            Variable::HeatIndexDiff,
            Variable::SuicideRate,
            UNUSUAL_HEAT,
        )
        .unwrap();
        // 90th percentile of 0..=99 is 89.1, 10th is 9.9: values 90..=99
        // and 0..=9 qualify
        assert_eq!(comparison.n_first, 10);
        assert_eq!(comparison.n_second, 10);
    }

    #[test]
    fn test_effect_size_matches_independent_cohen_d() {
        let rows = fixture();
        let comparison = top_vs_bottom(
            0.1,
            &rows,
            Variable::HeatIndexDiff,
            Variable::SuicideRate,
            UNUSUAL_HEAT,
        )
        .unwrap();

        let top: Vec<f64> = (90..100).map(|i| f64::from(i) / 10.0).collect();
        let bottom: Vec<f64> = (0..10).map(|i| f64::from(i) / 10.0).collect();
        assert!((comparison.cohen_d - cohen_d(&bottom, &top)).abs() < 1e-12);
        assert!(comparison.cohen_d > 0.0);
    }

    #[test]
    fn test_incomplete_rows_are_dropped_before_quantiles() {
        let mut rows = fixture();
        // Strip the population from the whole top decile
        for r in rows.iter_mut().filter(|r| {
            r.heat_index_diff.is_some_and(|v| v >= 90.0)
        }) {
            r.population = None;
        }
        let comparison = top_vs_bottom(
            0.1,
            &rows,
            Variable::HeatIndexDiff,
            Variable::SuicideRate,
            UNUSUAL_HEAT,
        )
        .unwrap();
        // Quantiles now come from the remaining 90 rows: 10th = 8.9,
        // 90th = 80.1, giving 9-value tails on each side
        assert_eq!(comparison.n_first, 9);
        assert_eq!(comparison.n_second, 9);
    }

    #[test]
    fn test_chart_labels_carry_percentiles() {
        let rows = fixture();
        let comparison = top_vs_bottom(
            0.1,
            &rows,
            Variable::HeatIndexDiff,
            Variable::SuicideRate,
            UNUSUAL_HEAT,
        )
        .unwrap();
        assert_eq!(comparison.chart.series[0].label, "90th percentile\nunusual heat");
        assert_eq!(comparison.chart.series[1].label, "10th percentile\nunusual heat");
        assert!(comparison.summary_lines()[1].starts_with("Cohen's d: "));
    }
}
