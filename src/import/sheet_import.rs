use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Cell, SheetRow};

/// File extensions offered by the file browser.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

pub(crate) fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

pub(crate) struct SheetImporter;

impl SheetImporter {
    /// Read the first worksheet of a workbook into keyed rows.
    ///
    /// Column names are not validated: whatever the header row says becomes
    /// the row's keys.
    pub(crate) fn read(path: &Path) -> Result<Vec<SheetRow>> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .unwrap_or_default();
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| anyhow::anyhow!("Workbook has no sheets: {}", path.display()))?
            .with_context(|| format!("Failed to read sheet '{sheet_name}'"))?;

        let rows = Self::rows_from_range(&range);
        tracing::info!(
            path = %path.display(),
            sheet = %sheet_name,
            rows = rows.len(),
            "read spreadsheet"
        );
        Ok(rows)
    }

    /// Turn a cell range into keyed rows. The first non-empty row is the
    /// header; fully empty data rows are dropped.
    pub(crate) fn rows_from_range(range: &Range<Data>) -> Vec<SheetRow> {
        let mut rows = range
            .rows()
            .skip_while(|r| r.iter().all(|c| matches!(c, Data::Empty)));

        let Some(header_row) = rows.next() else {
            return Vec::new();
        };
        let headers = header_names(header_row);

        rows.filter_map(|cells| {
            let mut row = SheetRow::new();
            for (key, data) in headers.iter().zip(cells) {
                if let Some(cell) = to_cell(data) {
                    row.insert(key.as_str(), cell);
                }
            }
            (!row.is_empty()).then_some(row)
        })
        .collect()
    }
}

/// Header keys with blanks named `__EMPTY` and repeats suffixed `_1`, `_2`, …
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    cells
        .iter()
        .map(|data| {
            let base = match to_cell(data) {
                Some(cell) => cell.to_string(),
                None => "__EMPTY".to_string(),
            };
            let mut name = base.clone();
            let mut n = 1;
            while used.contains(&name) {
                name = format!("{base}_{n}");
                n += 1;
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

fn to_cell(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Cell::Text(s.clone())),
        Data::Int(i) => Some(Cell::Number(Decimal::from(*i))),
        Data::Float(f) => Some(float_cell(*f)),
        Data::Bool(b) => Some(Cell::Bool(*b)),
        // Dates stay as their serial number
        Data::DateTime(dt) => Some(float_cell(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Cell::Text(s.clone())),
        Data::Error(e) => Some(Cell::Text(e.to_string())),
    }
}

fn float_cell(f: f64) -> Cell {
    // Display gives the shortest representation that round-trips
    let text = f.to_string();
    match Decimal::from_str(&text) {
        Ok(d) => Cell::Number(d),
        Err(_) => Cell::Text(text),
    }
}

#[cfg(test)]
#[path = "sheet_import_tests.rs"]
mod tests;
