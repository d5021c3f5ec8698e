//! Heat readings registry loader

use std::path::Path;

use log::info;

use super::Registry;
use super::tsv::TsvSource;
use crate::error::Result;
use crate::models::{HeatRecord, MonthCode};

/// Source header for the composite state-month code
const CODE_COLUMN: &str = "Month, Year Code";
/// Source headers for the three measurements, renamed at load time
const MAX_T_COLUMN: &str = "Avg Daily Max Air Temperature (F)";
const MIN_T_COLUMN: &str = "Avg Daily Min Air Temperature (F)";
const HEAT_INDEX_COLUMN: &str = "Avg Daily Max Heat Index (F)";

/// Loader for the state-month temperature and heat-index export
///
/// Year and month come out of the composite code column (first 4 and
/// last 2 characters); the verbose measurement headers are renamed to the
/// canonical `avg_max_t` / `avg_min_t` / `avg_max_heat_index`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatRegistry;

impl Registry for HeatRegistry {
    type Record = HeatRecord;

    fn name(&self) -> &'static str {
        "heat"
    }

    fn missing_token(&self) -> &'static str {
        "Missing"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            "State",
            CODE_COLUMN,
            MAX_T_COLUMN,
            MIN_T_COLUMN,
            HEAT_INDEX_COLUMN,
        ]
    }

    fn load(&self, path: &Path) -> Result<Vec<HeatRecord>> {
        let source = TsvSource::open(path, self.missing_token(), self.required_columns())?;

        let mut records = Vec::with_capacity(source.rows().len());
        for row in source.rows() {
            let Some(state) = source.field(row, "State") else {
                continue;
            };
            let Some(code) = source.field(row, CODE_COLUMN) else {
                continue;
            };
            let month_code: MonthCode = code.parse()?;

            records.push(HeatRecord {
                state: state.to_string(),
                year: month_code.year,
                month: month_code.month,
                month_code,
                avg_max_t: source.number(row, MAX_T_COLUMN)?,
                avg_min_t: source.number(row, MIN_T_COLUMN)?,
                avg_max_heat_index: source.number(row, HEAT_INDEX_COLUMN)?,
            });
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
