//! Shared tab-separated reading layer
//!
//! The government exports this pipeline consumes are tab-separated with a
//! header row, a per-source missing-value token, and ragged footer lines
//! (dataset notes) after the data. The footer lines have no State field
//! and are dropped by the loaders; missing required columns fail the load
//! up front.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use rustc_hash::FxHashMap;

use crate::error::{Result, StudyError};

/// An open tab-separated source with a validated header
pub struct TsvSource {
    path: PathBuf,
    rows: Vec<StringRecord>,
    index: FxHashMap<String, usize>,
    missing_token: &'static str,
}

impl TsvSource {
    /// Open a file, check the required columns, and read all rows
    pub fn open(path: &Path, missing_token: &'static str, required: &[&str]) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let index: FxHashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        for column in required {
            if !index.contains_key(*column) {
                return Err(StudyError::MissingColumn {
                    column: (*column).to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            path: path.to_path_buf(),
            rows,
            index,
            missing_token,
        })
    }

    /// Path the source was opened from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All data rows, footer lines included
    #[must_use]
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// A cell by column name, `None` when absent, empty, or the
    /// source's missing token
    #[must_use]
    pub fn field<'r>(&self, row: &'r StringRecord, column: &str) -> Option<&'r str> {
        let idx = *self.index.get(column)?;
        match row.get(idx) {
            None => None,
            Some(s) if s.is_empty() || s == self.missing_token => None,
            Some(s) => Some(s),
        }
    }

    /// A numeric cell, `None` when missing; parse failure is an error
    pub fn number(&self, row: &StringRecord, column: &str) -> Result<Option<f64>> {
        self.field(row, column)
            .map(|s| {
                s.parse::<f64>().map_err(|_| StudyError::InvalidNumber {
                    column: column.to_string(),
                    value: s.to_string(),
                })
            })
            .transpose()
    }

    /// An integer cell, `None` when missing; parse failure is an error
    pub fn integer(&self, row: &StringRecord, column: &str) -> Result<Option<i32>> {
        self.field(row, column)
            .map(|s| {
                s.parse::<i32>().map_err(|_| StudyError::InvalidNumber {
                    column: column.to_string(),
                    value: s.to_string(),
                })
            })
            .transpose()
    }
}
