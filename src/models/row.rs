use rust_decimal::Decimal;

use super::{BudgetLine, SheetRow};

/// Columns of the dashboard table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Code,
    Description,
    Allocation,
    Disbursement,
    Spend,
    TotalRealization,
    Variance,
    RemainingCeiling,
    Status,
}

impl Column {
    pub fn all() -> &'static [Column] {
        &[
            Self::Code,
            Self::Description,
            Self::Allocation,
            Self::Disbursement,
            Self::Spend,
            Self::TotalRealization,
            Self::Variance,
            Self::RemainingCeiling,
            Self::Status,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Code => "Kode",
            Self::Description => "Uraian",
            Self::Allocation => "RKA",
            Self::Disbursement => "RPD",
            Self::Spend => "SPJ",
            Self::TotalRealization => "Total Realisasi",
            Self::Variance => "Selisih",
            Self::RemainingCeiling => "Sisa Pagu",
            Self::Status => "Status",
        }
    }

    /// Field key an imported sheet must use for its values to land in this
    /// column.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Code => "kode",
            Self::Description => "uraian",
            Self::Allocation => "rka",
            Self::Disbursement => "rpd",
            Self::Spend => "spj",
            Self::TotalRealization => "totalRealisasi",
            Self::Variance => "selisih",
            Self::RemainingCeiling => "sisaPagu",
            Self::Status => "status",
        }
    }
}

/// An entry of the row store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Submitted through the entry form; derived fields are computed.
    Entered(BudgetLine),
    /// Taken verbatim from a spreadsheet; nothing is computed.
    Imported(SheetRow),
}

impl Row {
    /// Display text for a column, `None` when the row has no value for it.
    pub fn column(&self, column: Column) -> Option<String> {
        match self {
            Self::Entered(line) => Some(match column {
                Column::Code => line.code.clone(),
                Column::Description => line.description.clone(),
                Column::Allocation => line.planned_allocation.normalize().to_string(),
                Column::Disbursement => line.planned_disbursement.normalize().to_string(),
                Column::Spend => line.actual_spend.normalize().to_string(),
                Column::TotalRealization => {
                    line.derived.total_realization.normalize().to_string()
                }
                Column::Variance => line.derived.variance.normalize().to_string(),
                Column::RemainingCeiling => line.derived.remaining_ceiling.normalize().to_string(),
                Column::Status => line.derived.status.label().to_string(),
            }),
            Self::Imported(sheet) => sheet.get(column.key()).map(|c| c.to_string()),
        }
    }

    /// Label used on the chart's category axis.
    pub fn description(&self) -> String {
        self.column(Column::Description).unwrap_or_default()
    }

    /// RKA, RPD and SPJ for plotting. Missing values plot as zero.
    pub fn chart_values(&self) -> [Decimal; 3] {
        match self {
            Self::Entered(line) => [
                line.planned_allocation,
                line.planned_disbursement,
                line.actual_spend,
            ],
            Self::Imported(sheet) => [Column::Allocation, Column::Disbursement, Column::Spend]
                .map(|c| sheet.get(c.key()).map(|v| v.as_amount()).unwrap_or_default()),
        }
    }
}
