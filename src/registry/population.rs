//! State population registry loader

use std::path::Path;

use log::{info, warn};

use super::Registry;
use super::tsv::TsvSource;
use crate::error::Result;
use crate::models::PopulationRecord;

/// Loader for the annual state population export
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationRegistry;

impl Registry for PopulationRegistry {
    type Record = PopulationRecord;

    fn name(&self) -> &'static str {
        "population"
    }

    fn missing_token(&self) -> &'static str {
        "Not Applicable"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &["State", "Year", "Population"]
    }

    fn load(&self, path: &Path) -> Result<Vec<PopulationRecord>> {
        let source = TsvSource::open(path, self.missing_token(), self.required_columns())?;

        let mut records = Vec::with_capacity(source.rows().len());
        let mut skipped = 0usize;
        for row in source.rows() {
            let Some(state) = source.field(row, "State") else {
                continue;
            };
            let (Some(year), Some(population)) = (
                source.integer(row, "Year")?,
                source.number(row, "Population")?,
            ) else {
                skipped += 1;
                continue;
            };

            records.push(PopulationRecord {
                state: state.to_string(),
                year,
                population,
            });
        }

        if skipped > 0 {
            warn!(
                "{}: skipped {} rows with missing values in {}",
                self.name(),
                skipped,
                source.path().display()
            );
        }
        info!(
            "{}: loaded {} records from {}",
            self.name(),
            records.len(),
            source.path().display()
        );
        Ok(records)
    }
}
