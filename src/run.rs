mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::{as_tui, TuiOptions};
