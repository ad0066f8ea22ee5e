mod budget_line;
mod month;
mod row;
mod sheet;

pub use budget_line::{BudgetLine, Derived, Status};
pub use month::Month;
pub use row::{Column, Row};
pub use sheet::{Cell, SheetRow};

#[cfg(test)]
mod tests;
