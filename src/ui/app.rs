use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::import::{is_spreadsheet, SheetImporter};
use crate::models::{BudgetLine, Derived, Month};
use crate::store::RowStore;
use crate::variance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Entry,
    Import,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Entry, Self::Import]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Entry => write!(f, "Input"),
            Self::Import => write!(f, "Import"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "INPUT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    Code,
    Description,
    Allocation,
    Disbursement,
    Spend,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Code,
            Self::Description,
            Self::Allocation,
            Self::Disbursement,
            Self::Spend,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Code => "Kode Akun",
            Self::Description => "Uraian",
            Self::Allocation => "RKA",
            Self::Disbursement => "RPD",
            Self::Spend => "SPJ",
        }
    }

    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Self::Allocation | Self::Disbursement | Self::Spend)
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub(crate) fn next(&self) -> Self {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    pub(crate) fn prev(&self) -> Self {
        let all = Self::all();
        let idx = self.position();
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }

    pub(crate) fn is_last(&self) -> bool {
        self.position() + 1 == Self::all().len()
    }
}

/// Manual entry form. Values are kept as typed; coercion happens on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EntryForm {
    pub(crate) code: String,
    pub(crate) description: String,
    pub(crate) allocation: String,
    pub(crate) disbursement: String,
    pub(crate) spend: String,
    pub(crate) focus: FormField,
}

impl EntryForm {
    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Code => &self.code,
            FormField::Description => &self.description,
            FormField::Allocation => &self.allocation,
            FormField::Disbursement => &self.disbursement,
            FormField::Spend => &self.spend,
        }
    }

    pub(crate) fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Code => &mut self.code,
            FormField::Description => &mut self.description,
            FormField::Allocation => &mut self.allocation,
            FormField::Disbursement => &mut self.disbursement,
            FormField::Spend => &mut self.spend,
        }
    }

    /// Type one character into the focused field. Amount fields only take
    /// characters that can appear in a number.
    pub(crate) fn push_char(&mut self, c: char) {
        let field = self.focus;
        if field.is_numeric() && !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        self.value_mut(field).push(c);
    }

    pub(crate) fn pop_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub(crate) fn is_blank(&self) -> bool {
        FormField::all().iter().all(|f| self.value(*f).is_empty())
    }

    /// Derived fields for the values typed so far.
    pub(crate) fn preview(&self) -> Derived {
        variance::compute(
            variance::parse_amount(&self.allocation),
            variance::parse_amount(&self.disbursement),
            variance::parse_amount(&self.spend),
        )
    }

    pub(crate) fn to_line(&self) -> BudgetLine {
        BudgetLine::from_entry(
            &self.code,
            &self.description,
            &self.allocation,
            &self.disbursement,
            &self.spend,
        )
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) month: Month,

    // Dashboard
    pub(crate) store: RowStore,
    pub(crate) table_index: usize,
    pub(crate) table_scroll: usize,

    // Entry
    pub(crate) form: EntryForm,

    // File browser
    pub(crate) file_browser_path: PathBuf,
    pub(crate) file_browser_entries: Vec<PathBuf>,
    pub(crate) file_browser_index: usize,
    pub(crate) file_browser_scroll: usize,
    pub(crate) file_browser_show_hidden: bool,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(start_dir: PathBuf) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month: Month::default(),

            store: RowStore::new(),
            table_index: 0,
            table_scroll: 0,

            form: EntryForm::default(),

            file_browser_path: start_dir,
            file_browser_entries: Vec::new(),
            file_browser_index: 0,
            file_browser_scroll: 0,
            file_browser_show_hidden: false,

            visible_rows: 20,
        }
    }

    /// Append the form as a new row and reset every field, regardless of
    /// what was typed.
    pub(crate) fn submit_entry(&mut self) {
        let line = self.form.to_line();
        let status = line.derived.status;
        let code = line.code.clone();
        self.store.append(line);
        self.form.clear();
        self.set_status(format!("Added {code} ({status})"));
    }

    /// Replace every row with the first sheet of `path`. On failure the
    /// current rows are left alone.
    pub(crate) fn import_file(&mut self, path: &Path) -> Result<usize> {
        let rows = SheetImporter::read(path)?;
        let count = rows.len();
        self.store.replace_with_import(rows);
        self.table_index = 0;
        self.table_scroll = 0;
        self.set_status(format!("Imported {count} rows from {}", path.display()));
        Ok(count)
    }

    pub(crate) fn set_month(&mut self, month: Month) {
        tracing::debug!(from = %self.month, to = %month, "month changed");
        self.month = month;
    }

    pub(crate) fn refresh_file_browser(&mut self) {
        let mut entries: Vec<PathBuf> = Vec::new();

        if let Some(parent) = self.file_browser_path.parent() {
            entries.push(parent.to_path_buf());
        }

        match std::fs::read_dir(&self.file_browser_path) {
            Ok(read_dir) => {
                let is_hidden = |p: &PathBuf| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with('.'))
                };

                let all: Vec<PathBuf> = read_dir
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| {
                        (self.file_browser_show_hidden || !is_hidden(p))
                            && (p.is_dir() || is_spreadsheet(p))
                    })
                    .collect();

                // Dirs first, then files, each sorted alphabetically
                let (mut dirs, mut files): (Vec<PathBuf>, Vec<PathBuf>) =
                    all.into_iter().partition(|p| p.is_dir());
                dirs.sort();
                files.sort();
                entries.extend(dirs);
                entries.extend(files);
            }
            Err(e) => {
                tracing::warn!(path = %self.file_browser_path.display(), error = %e, "cannot list directory");
            }
        }

        self.file_browser_entries = entries;
        self.file_browser_index = 0;
        self.file_browser_scroll = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
