//! Error handling for the heat study pipeline.

use std::path::PathBuf;

/// Specialized error type for loading and analysing the study datasets
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying delimited-text reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a source file
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A composite month code did not parse as YYYY/MM
    #[error("Invalid month code '{0}'")]
    InvalidMonthCode(String),

    /// A field expected to be numeric failed to parse
    #[error("Invalid number '{value}' in column '{column}'")]
    InvalidNumber { column: String, value: String },

    /// Percentile outside the supported (0, 0.5] range
    #[error("Percentile must be in (0, 0.5], got {0}")]
    InvalidPercentile(f64),

    /// Error while rendering a chart
    #[error("Plot error: {0}")]
    Plot(String),
}

/// Alias for Result with `StudyError`
pub type Result<T> = std::result::Result<T, StudyError>;
