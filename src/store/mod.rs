use crate::models::{BudgetLine, Row, SheetRow};

/// In-memory rows of the dashboard for the current session.
///
/// Imports replace everything; manual entries append one row. Rows are
/// never edited, merged or removed individually.
#[derive(Debug, Default)]
pub(crate) struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Swap in the rows of a freshly imported sheet.
    pub(crate) fn replace_with_import(&mut self, rows: Vec<SheetRow>) {
        tracing::info!(previous = self.rows.len(), imported = rows.len(), "replacing rows from import");
        self.rows = rows.into_iter().map(Row::Imported).collect();
    }

    pub(crate) fn append(&mut self, line: BudgetLine) {
        tracing::debug!(code = %line.code, status = %line.derived.status, "appending entry");
        self.rows.push(Row::Entered(line));
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
