//! A Rust library for correlating state-month heat records with suicide
//! mortality: loading the tab-separated government exports, merging them on
//! state/month keys, deriving rates and seasonal deviations, and running
//! seasonal and percentile cohort comparisons with overlaid-distribution
//! charts.

pub mod config;
pub mod error;
pub mod models;
pub mod plot;
pub mod registry;
pub mod stats;
pub mod study;
pub mod transform;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::StudyConfig;
pub use error::{Result, StudyError};
pub use models::{
    EnrichedRecord, HeatRecord, MonthCode, MonthlyStateAggregate, Observation, PopulationRecord,
    Season, SuicideRecord, Variable,
};

// Loaders
pub use registry::{load_heat, load_population, load_suicides};

// Pipeline stages
pub use transform::{attach_population, join_heat, monthly_state_means};

// Comparisons
pub use study::{Comparison, summer_vs_winter, top_vs_bottom};

// Charting
pub use plot::{OverlayChart, render_svg};
