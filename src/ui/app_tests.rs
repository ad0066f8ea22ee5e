#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::{Row, Status};

fn test_app() -> App {
    App::new(std::env::temp_dir())
}

fn fill(form: &mut EntryForm, values: [&str; 5]) {
    for (field, value) in FormField::all().iter().zip(values) {
        *form.value_mut(*field) = value.to_string();
    }
}

// ── EntryForm ─────────────────────────────────────────────────

#[test]
fn test_form_field_cycle() {
    assert_eq!(FormField::Code.next(), FormField::Description);
    assert_eq!(FormField::Spend.next(), FormField::Code);
    assert_eq!(FormField::Code.prev(), FormField::Spend);
    assert!(FormField::Spend.is_last());
    assert!(!FormField::Allocation.is_last());
}

#[test]
fn test_push_char_filters_amount_fields() {
    let mut form = EntryForm::default();
    form.focus = FormField::Allocation;
    for c in "1a2.5x".chars() {
        form.push_char(c);
    }
    assert_eq!(form.allocation, "12.5");

    form.focus = FormField::Description;
    for c in "ATK 2024".chars() {
        form.push_char(c);
    }
    assert_eq!(form.description, "ATK 2024");
    form.pop_char();
    assert_eq!(form.description, "ATK 202");
}

#[test]
fn test_form_preview_matches_submission() {
    let mut form = EntryForm::default();
    fill(&mut form, ["A", "x", "1000", "800", "800"]);
    let preview = form.preview();
    assert_eq!(preview.remaining_ceiling, dec!(200));
    assert_eq!(preview, form.to_line().derived);
}

#[test]
fn test_form_clear() {
    let mut form = EntryForm::default();
    fill(&mut form, ["A", "x", "1", "2", "3"]);
    form.focus = FormField::Spend;
    assert!(!form.is_blank());
    form.clear();
    assert!(form.is_blank());
    assert_eq!(form.focus, FormField::Code);
}

// ── submit_entry ──────────────────────────────────────────────

#[test]
fn test_submit_appends_one_row_and_resets_form() {
    let mut app = test_app();
    app.submit_entry();
    assert_eq!(app.store.len(), 1);

    fill(&mut app.form, ["521211", "Belanja Bahan", "1000", "800", "1200"]);
    app.submit_entry();

    assert_eq!(app.store.len(), 2);
    assert!(app.form.is_blank());
    match &app.store.rows()[1] {
        Row::Entered(line) => {
            assert_eq!(line.code, "521211");
            assert_eq!(line.derived.variance, dec!(-400));
            assert_eq!(line.derived.status, Status::Overrun);
        }
        other => panic!("unexpected row {other:?}"),
    }
    assert!(app.status_message.contains("Minus"));
}

#[test]
fn test_submit_with_empty_amounts_counts_as_zero() {
    let mut app = test_app();
    fill(&mut app.form, ["A", "kosong", "", "", ""]);
    app.submit_entry();
    match &app.store.rows()[0] {
        Row::Entered(line) => {
            assert_eq!(line.planned_allocation, dec!(0));
            assert_eq!(line.derived.status, Status::Safe);
        }
        other => panic!("unexpected row {other:?}"),
    }
}

// ── import_file ───────────────────────────────────────────────

#[test]
fn test_failed_import_keeps_rows() {
    let mut app = test_app();
    fill(&mut app.form, ["A", "x", "1", "1", "1"]);
    app.submit_entry();

    let result = app.import_file(Path::new("/nonexistent/anggaran.xlsx"));
    assert!(result.is_err());
    assert_eq!(app.store.len(), 1);
}

#[test]
fn test_import_replaces_every_row() {
    use crate::import::fixture::{write_workbook, Sheet, Value::Number, Value::Text};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anggaran.xlsx");
    write_workbook(
        &path,
        &[Sheet {
            name: "Sheet1",
            rows: vec![
                vec![Text("kode"), Text("rka")],
                vec![Text("B1"), Number(10.0)],
                vec![Text("B2"), Number(20.0)],
                vec![Text("B3"), Number(30.0)],
            ],
        }],
    );

    let mut app = test_app();
    app.submit_entry();
    app.submit_entry();
    app.table_index = 1;

    assert_eq!(app.import_file(&path).unwrap(), 3);
    assert_eq!(app.store.len(), 3);
    assert_eq!(app.table_index, 0);
    for (row, code) in app.store.rows().iter().zip(["B1", "B2", "B3"]) {
        match row {
            Row::Imported(sheet) => {
                assert_eq!(sheet.len(), 2);
                assert_eq!(sheet.get("kode").map(|c| c.to_string()), Some(code.to_string()));
            }
            other => panic!("unexpected row {other:?}"),
        }
    }
}

// ── month ─────────────────────────────────────────────────────

#[test]
fn test_month_change_does_not_touch_rows() {
    let mut app = test_app();
    app.submit_entry();
    app.set_month(Month::Oktober);
    assert_eq!(app.month, Month::Oktober);
    assert_eq!(app.store.len(), 1);
}

// ── file browser ──────────────────────────────────────────────

#[test]
fn test_file_browser_lists_dirs_and_spreadsheets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("arsip")).unwrap();
    std::fs::write(dir.path().join("b.xlsx"), b"").unwrap();
    std::fs::write(dir.path().join("a.XLS"), b"").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
    std::fs::write(dir.path().join(".hidden.xlsx"), b"").unwrap();

    let mut app = App::new(dir.path().to_path_buf());
    app.refresh_file_browser();

    let names: Vec<String> = app
        .file_browser_entries
        .iter()
        .skip(1) // parent
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["arsip", "a.XLS", "b.xlsx"]);

    app.file_browser_show_hidden = true;
    app.refresh_file_browser();
    assert_eq!(app.file_browser_entries.len(), 5);
}
