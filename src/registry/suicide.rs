//! Suicide mortality registry loader

use std::path::Path;

use log::{info, warn};

use super::Registry;
use super::tsv::TsvSource;
use crate::error::Result;
use crate::models::{MonthCode, SuicideRecord};

/// Loader for the monthly suicide mortality export
///
/// The source also carries Notes, Crude Rate, Population, and Year Code
/// columns; all are ignored here — population is re-attached later from
/// the authoritative population table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuicideRegistry;

impl Registry for SuicideRegistry {
    type Record = SuicideRecord;

    fn name(&self) -> &'static str {
        "suicides"
    }

    fn missing_token(&self) -> &'static str {
        "Not Applicable"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &["State", "Year", "Month Code", "Deaths"]
    }

    fn load(&self, path: &Path) -> Result<Vec<SuicideRecord>> {
        let source = TsvSource::open(path, self.missing_token(), self.required_columns())?;

        let mut records = Vec::with_capacity(source.rows().len());
        let mut skipped = 0usize;
        for row in source.rows() {
            // Rows without a State are header/footer artifacts
            let Some(state) = source.field(row, "State") else {
                continue;
            };
            let (Some(year), Some(code), Some(deaths)) = (
                source.integer(row, "Year")?,
                source.field(row, "Month Code"),
                source.number(row, "Deaths")?,
            ) else {
                skipped += 1;
                continue;
            };
            let month_code: MonthCode = code.parse()?;

            records.push(SuicideRecord {
                state: state.to_string(),
                year,
                month: month_code.month,
                month_code,
                deaths,
                population: None,
                suicide_rate: None,
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
