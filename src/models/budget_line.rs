use rust_decimal::Decimal;

use crate::variance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Safe,
    Short,
    Overrun,
}

impl Status {
    /// Badge label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Aman",
            Self::Short => "Kurang",
            Self::Overrun => "Minus",
        }
    }

    /// Recognizes a badge label. Imported sheets carry whatever text the
    /// author typed, so anything else is not a status.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Aman" => Some(Self::Safe),
            "Kurang" => Some(Self::Short),
            "Minus" => Some(Self::Overrun),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fields computed from allocation, disbursement and spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub total_realization: Decimal,
    /// Planned disbursement minus actual spend (selisih).
    pub variance: Decimal,
    /// Allocation minus total realization (sisa pagu).
    pub remaining_ceiling: Decimal,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub code: String,
    pub description: String,
    /// RKA
    pub planned_allocation: Decimal,
    /// RPD
    pub planned_disbursement: Decimal,
    /// SPJ
    pub actual_spend: Decimal,
    pub derived: Derived,
}

impl BudgetLine {
    pub fn new(
        code: String,
        description: String,
        planned_allocation: Decimal,
        planned_disbursement: Decimal,
        actual_spend: Decimal,
    ) -> Self {
        let derived = variance::compute(planned_allocation, planned_disbursement, actual_spend);
        Self {
            code,
            description,
            planned_allocation,
            planned_disbursement,
            actual_spend,
            derived,
        }
    }

    /// Build a line from raw form text. Unparsable amounts count as zero.
    pub fn from_entry(code: &str, description: &str, rka: &str, rpd: &str, spj: &str) -> Self {
        Self::new(
            code.to_string(),
            description.to_string(),
            variance::parse_amount(rka),
            variance::parse_amount(rpd),
            variance::parse_amount(spj),
        )
    }
}
