use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, FormField, InputMode, Screen};
use super::util::expand_home;
use crate::models::Month;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit CLARA", cmd_quit, r);
    register_command!("quit", "Quit CLARA", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to the entry form", cmd_entry, r);
    register_command!("entry", "Go to the entry form", cmd_entry, r);
    register_command!("i", "Import spreadsheet", cmd_import, r);
    register_command!(
        "import",
        "Import spreadsheet (e.g. :import ~/anggaran.xlsx)",
        cmd_import,
        r
    );
    register_command!("m", "Set month (e.g. :m Maret)", cmd_month, r);
    register_command!("month", "Set month (e.g. :month Maret, :month 3)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "add",
        "Submit the form, or add inline (e.g. :add 521211;ATK;1000;800;750)",
        cmd_add,
        r
    );
    register_command!("clear", "Clear the entry form", cmd_clear, r);
    register_command!(
        "export",
        "Export the table to CSV (e.g. :export ~/clara.csv)",
        cmd_export,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_entry(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Entry;
    app.input_mode = InputMode::Editing;
    Ok(())
}

fn cmd_import(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.screen = Screen::Import;
        app.refresh_file_browser();
        return Ok(());
    }

    let path = expand_home(args);
    if let Err(e) = app.import_file(&path) {
        tracing::warn!(path = %path.display(), error = %e, "import failed");
        app.set_status(format!("Error loading file: {e:#}"));
    } else {
        app.screen = Screen::Dashboard;
    }
    Ok(())
}

fn cmd_month(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!("Month: {}", app.month));
        return Ok(());
    }
    match Month::parse(args) {
        Some(month) => {
            app.set_month(month);
            app.set_status(format!("Switched to month: {month}"));
        }
        None => {
            app.set_status("Invalid month. Use a name (Januari..Desember) or 1-12");
        }
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_month(app.month.next());
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_month(app.month.prev());
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !args.is_empty() {
        app.form.clear();
        for (field, value) in FormField::all().iter().zip(args.split(';')) {
            *app.form.value_mut(*field) = value.trim().to_string();
        }
    }
    app.submit_entry();
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.form.clear();
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        expand_home("~/clara-export.csv")
    } else {
        expand_home(args)
    };

    match crate::export::export_to_path(app.store.rows(), &path) {
        Ok(count) => app.set_status(format!("Exported {count} rows to {}", path.display())),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
