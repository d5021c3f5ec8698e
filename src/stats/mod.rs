//! Statistical routines
//!
//! Descriptive statistics, Welch's two-sample t-test, and the pooled
//! standard-deviation effect size used by the cohort comparisons.

pub mod describe;
pub mod effect;
pub mod ttest;

pub use describe::{mean, quantile, sample_std, sample_variance};
pub use effect::cohen_d;
pub use ttest::{TestResult, welch_t_test};
