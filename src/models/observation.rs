//! Uniform row access for the comparator

use super::types::Variable;

/// A row the comparator can draw cohorts from
///
/// Implemented by both the merged table and the monthly aggregate, so the
/// seasonal and percentile comparisons run on either without caring which
/// stage of the pipeline produced the data.
pub trait Observation {
    /// State the observation belongs to
    fn state(&self) -> &str;

    /// Calendar month 1-12
    fn month(&self) -> u32;

    /// Value of the given variable, `None` when missing or when the
    /// observation type does not carry that column
    fn value(&self, var: Variable) -> Option<f64>;

    /// Whether every column this observation type carries is present
    fn is_complete(&self) -> bool;
}
