mod export;
mod import;
mod logging;
mod models;
mod run;
mod store;
mod ui;
mod variance;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(run::TuiOptions::default()),
        _ => run::as_cli(&args),
    }
}
