//! Cohort comparisons
//!
//! The comparator builds two cohorts of a target variable — by calendar
//! season or by percentile split on a covariate — and reports a Welch
//! t-test, a one-tailed p-value, Cohen's d, and an overlaid-distribution
//! chart. Both comparisons accept anything implementing
//! [`crate::models::Observation`], so they run on the merged table or the
//! monthly aggregate alike.

pub mod percentile;
pub mod season;

use std::fmt;

use serde::Serialize;

use crate::plot::OverlayChart;
use crate::stats::TestResult;

pub use percentile::top_vs_bottom;
pub use season::summer_vs_winter;

/// Result of one cohort comparison
///
/// `Display` renders the two summary lines the analysis prints: the
/// one-tailed t-test and the effect size.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Size of the first cohort handed to the t-test
    pub n_first: usize,
    /// Size of the second cohort handed to the t-test
    pub n_second: usize,
    pub test: TestResult,
    pub cohen_d: f64,
    #[serde(skip)]
    pub chart: OverlayChart,
    #[serde(skip)]
    summary: [String; 2],
}

impl Comparison {
    pub(crate) fn new(
        n_first: usize,
        n_second: usize,
        test: TestResult,
        cohen_d: f64,
        chart: OverlayChart,
        summary: [String; 2],
    ) -> Self {
        Self {
            n_first,
            n_second,
            test,
            cohen_d,
            chart,
            summary,
        }
    }

    /// The two formatted summary lines
    #[must_use]
    pub fn summary_lines(&self) -> &[String; 2] {
        &self.summary
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary[0])?;
        write!(f, "{}", self.summary[1])
    }
}
