//! Source-file loaders
//!
//! One registry per input file: suicide mortality, state population, and
//! heat readings. Each registry declares its required columns and its
//! missing-value token, and turns the tab-separated source into typed
//! records over the shared [`tsv`] layer. Loaders normalize shape and
//! vocabulary only — no merging and no derived-rate computation happens
//! here.

pub mod dataset;
pub mod heat;
pub mod population;
pub mod suicide;
pub mod tsv;

use std::path::Path;

use crate::error::Result;

pub use heat::HeatRegistry;
pub use population::PopulationRegistry;
pub use suicide::SuicideRegistry;

/// A loadable source file
pub trait Registry {
    /// Record type this registry produces
    type Record;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Token the source uses for missing values
    fn missing_token(&self) -> &'static str;

    /// Columns that must be present in the header row
    fn required_columns(&self) -> &'static [&'static str];

    /// Load and normalize all records from the file
    fn load(&self, path: &Path) -> Result<Vec<Self::Record>>;
}

/// Load the suicide mortality file
pub fn load_suicides(path: &Path) -> Result<Vec<crate::models::SuicideRecord>> {
    SuicideRegistry.load(path)
}

/// Load the state population file
pub fn load_population(path: &Path) -> Result<Vec<crate::models::PopulationRecord>> {
    PopulationRegistry.load(path)
}

/// Load the heat readings file
pub fn load_heat(path: &Path) -> Result<Vec<crate::models::HeatRecord>> {
    HeatRegistry.load(path)
}
