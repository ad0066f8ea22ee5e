use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{Column, Row};

/// Write the dashboard table as CSV: one header record with the column
/// titles, then one record per row. Missing values are written empty.
pub(crate) fn write_csv<W: Write>(rows: &[Row], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Column::all().iter().map(|c| c.header()))
        .context("Failed to write CSV header")?;
    for row in rows {
        let record: Vec<String> = Column::all()
            .iter()
            .map(|c| row.column(*c).unwrap_or_default())
            .collect();
        wtr.write_record(&record)
            .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}

pub(crate) fn export_to_path(rows: &[Row], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let count = write_csv(rows, file)?;
    tracing::info!(path = %path.display(), rows = count, "exported table");
    Ok(count)
}
