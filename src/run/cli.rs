use anyhow::Result;
use std::path::{Path, PathBuf};

use super::tui::{as_tui, TuiOptions};
use crate::import::{is_spreadsheet, SheetImporter};
use crate::models::{BudgetLine, Column, Month, Row};
use crate::store::RowStore;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "open" => as_tui(parse_tui_options(&args[2..])?),
        "--month" | "-m" => as_tui(parse_tui_options(&args[1..])?),
        "show" => {
            crate::logging::init_for_cli()?;
            cli_show(&args[2..])
        }
        "calc" => {
            crate::logging::init_for_cli()?;
            cli_calc(&args[2..])
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("clara {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other if is_spreadsheet(Path::new(other)) => as_tui(parse_tui_options(&args[1..])?),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("CLARA - budget control dashboard (RKA / RPD / SPJ)");
    println!();
    println!("Usage: clara [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive dashboard");
    println!("  <file.xlsx>, open <file>      Launch dashboard with a spreadsheet loaded");
    println!("    --month <name|1-12>         Month label shown above the chart");
    println!("  show <file.xlsx>              Print the first sheet as a table");
    println!("    --csv                       Write CSV to stdout instead");
    println!("  calc <rka> <rpd> <spj>        Print realization, variance and status");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Parse `[file] [--month <m>]` in any order.
pub(crate) fn parse_tui_options(args: &[String]) -> Result<TuiOptions> {
    let mut options = TuiOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--month" | "-m" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--month needs a value"))?;
                options.month =
                    Month::parse(value).ok_or_else(|| anyhow::anyhow!("Unknown month: {value}"))?;
            }
            flag if flag.starts_with('-') => anyhow::bail!("Unknown option: {flag}"),
            path => {
                if options.file.is_some() {
                    anyhow::bail!("Only one spreadsheet can be opened at a time");
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }
    Ok(options)
}

fn cli_show(args: &[String]) -> Result<()> {
    let csv = args.iter().any(|a| a == "--csv");
    let file = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .ok_or_else(|| anyhow::anyhow!("Usage: clara show <file.xlsx> [--csv]"))?;
    let path = Path::new(file);
    if !path.exists() {
        anyhow::bail!("File not found: {file}");
    }

    let mut store = RowStore::new();
    store.replace_with_import(SheetImporter::read(path)?);

    if csv {
        crate::export::write_csv(store.rows(), std::io::stdout().lock())?;
    } else {
        print!("{}", table_report(store.rows()));
    }
    Ok(())
}

/// Plain-text rendering of the dashboard table.
pub(crate) fn table_report(rows: &[Row]) -> String {
    const WIDTHS: [usize; 9] = [10, 24, 12, 12, 12, 15, 12, 12, 7];

    let mut out = String::new();
    let header: Vec<String> = Column::all()
        .iter()
        .zip(WIDTHS)
        .map(|(c, w)| format!("{:<w$}", c.header()))
        .collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');
    out.push_str(&"─".repeat(WIDTHS.iter().sum::<usize>() + WIDTHS.len() - 1));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = Column::all()
            .iter()
            .zip(WIDTHS)
            .map(|(c, w)| format!("{:<w$}", truncate(&row.column(*c).unwrap_or_default(), w)))
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out.push_str(&format!("{} rows\n", rows.len()));
    out
}

fn cli_calc(args: &[String]) -> Result<()> {
    let [rka, rpd, spj] = args else {
        anyhow::bail!("Usage: clara calc <rka> <rpd> <spj>");
    };
    print!("{}", calc_report(rka, rpd, spj));
    Ok(())
}

pub(crate) fn calc_report(rka: &str, rpd: &str, spj: &str) -> String {
    let line = BudgetLine::from_entry("", "", rka, rpd, spj);
    let d = &line.derived;
    let rows = [
        ("RKA", format_amount(line.planned_allocation)),
        ("RPD", format_amount(line.planned_disbursement)),
        ("SPJ", format_amount(line.actual_spend)),
        ("Total Realisasi", format_amount(d.total_realization)),
        ("Selisih", format_amount(d.variance)),
        ("Sisa Pagu", format_amount(d.remaining_ceiling)),
        ("Status", d.status.label().to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<17}{value}\n", format!("{label}:")))
        .collect::<String>()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
