//! Merging and aggregation
//!
//! The pipeline stages between loading and comparison: attaching
//! population to derive the suicide rate, joining heat readings and
//! computing grouped-mean deviations, and collapsing the merged table to
//! per-state monthly means. Every stage is a pure function over its
//! input slice and returns a new vector; callers' data is never mutated.

pub mod aggregate;
pub mod heat;
pub mod rate;

pub use aggregate::monthly_state_means;
pub use heat::join_heat;
pub use rate::attach_population;
