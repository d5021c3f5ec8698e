//! Round-trip persistence of the merged dataset
//!
//! The merge output can be written to a tab-separated file and read back
//! in a later exploratory session, skipping the joins. Month codes travel
//! as their `YYYY/MM` string form.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::EnrichedRecord;

/// Write the merged table to a tab-separated file
pub fn write_dataset(path: &Path, rows: &[EnrichedRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("dataset: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read a merged table previously written by [`write_dataset`]
pub fn read_dataset(path: &Path) -> Result<Vec<EnrichedRecord>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<EnrichedRecord>, _>>()?;
    info!("dataset: read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
