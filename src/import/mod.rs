mod sheet_import;

#[cfg(test)]
pub(crate) mod fixture;

pub(crate) use sheet_import::{is_spreadsheet, SheetImporter};
