pub(crate) mod dashboard;
pub(crate) mod entry;
pub(crate) mod import;
