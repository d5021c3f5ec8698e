//! Configuration for an analysis run.

use std::path::PathBuf;

use crate::models::Variable;

/// Configuration for one batch analysis run
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Suicide mortality export
    pub suicides_path: PathBuf,
    /// Annual state population export
    pub population_path: PathBuf,
    /// State-month heat readings export
    pub heat_path: PathBuf,
    /// Where to write rendered charts; `None` skips rendering
    pub charts_dir: Option<PathBuf>,
    /// Tail size for the percentile comparison
    pub percentile: f64,
    /// Covariate the percentile comparison splits on
    pub covariate: Variable,
    /// Variable both comparisons target
    pub target: Variable,
}

impl StudyConfig {
    /// Create a config with default comparison settings
    pub fn new(
        suicides_path: impl Into<PathBuf>,
        population_path: impl Into<PathBuf>,
        heat_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            suicides_path: suicides_path.into(),
            population_path: population_path.into(),
            heat_path: heat_path.into(),
            charts_dir: None,
            percentile: 0.1,
            covariate: Variable::HeatIndexDiff,
            target: Variable::SuicideRate,
        }
    }

    /// Render charts into the given directory
    #[must_use]
    pub fn with_charts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.charts_dir = Some(dir.into());
        self
    }

    /// Set the percentile tail size
    #[must_use]
    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Set the covariate for the percentile comparison
    #[must_use]
    pub fn with_covariate(mut self, covariate: Variable) -> Self {
        self.covariate = covariate;
        self
    }

    /// Set the target variable for both comparisons
    #[must_use]
    pub fn with_target(mut self, target: Variable) -> Self {
        self.target = target;
        self
    }
}
