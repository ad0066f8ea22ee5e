use rust_decimal::Decimal;

use crate::variance;

/// A single non-empty spreadsheet value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Decimal),
    Bool(bool),
}

impl Cell {
    /// Numeric reading of the cell, used for plotting. Text goes through the
    /// same lenient coercion as manual entry.
    pub fn as_amount(&self) -> Decimal {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => variance::parse_amount(s),
            Self::Bool(_) => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
        }
    }
}

/// One data row of an imported sheet, keyed by the header row. Keys keep
/// sheet column order; empty cells have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    fields: Vec<(String, Cell)>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, cell: Cell) {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = cell;
        } else {
            self.fields.push((key, cell));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
