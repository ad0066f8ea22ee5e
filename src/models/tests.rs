#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn sheet_row(pairs: &[(&str, Cell)]) -> SheetRow {
    let mut row = SheetRow::new();
    for (k, v) in pairs {
        row.insert(*k, v.clone());
    }
    row
}

// ── BudgetLine ────────────────────────────────────────────────

#[test]
fn test_from_entry_computes_derived() {
    let line = BudgetLine::from_entry("521211", "Belanja Bahan", "1000", "800", "1200");
    assert_eq!(line.code, "521211");
    assert_eq!(line.description, "Belanja Bahan");
    assert_eq!(line.planned_allocation, dec!(1000));
    assert_eq!(line.derived.total_realization, dec!(1200));
    assert_eq!(line.derived.variance, dec!(-400));
    assert_eq!(line.derived.remaining_ceiling, dec!(-200));
    assert_eq!(line.derived.status, Status::Overrun);
}

#[test]
fn test_from_entry_coerces_bad_numbers() {
    let line = BudgetLine::from_entry("", "", "", "abc", "");
    assert_eq!(line.planned_allocation, Decimal::ZERO);
    assert_eq!(line.planned_disbursement, Decimal::ZERO);
    assert_eq!(line.actual_spend, Decimal::ZERO);
    assert_eq!(line.derived.status, Status::Safe);
}

// ── Status ────────────────────────────────────────────────────

#[test]
fn test_status_labels() {
    assert_eq!(Status::Safe.label(), "Aman");
    assert_eq!(Status::Short.label(), "Kurang");
    assert_eq!(Status::Overrun.label(), "Minus");
    assert_eq!(format!("{}", Status::Short), "Kurang");
}

#[test]
fn test_status_from_label() {
    for s in [Status::Safe, Status::Short, Status::Overrun] {
        assert_eq!(Status::from_label(s.label()), Some(s));
    }
    assert_eq!(Status::from_label(" Minus "), Some(Status::Overrun));
    assert_eq!(Status::from_label("aman"), None);
    assert_eq!(Status::from_label("OK"), None);
}

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_default_is_januari() {
    assert_eq!(Month::default(), Month::Januari);
}

#[test]
fn test_month_all_has_twelve() {
    assert_eq!(Month::all().len(), 12);
    assert_eq!(Month::all()[11].name(), "Desember");
}

#[test]
fn test_month_cycle_wraps() {
    assert_eq!(Month::Desember.next(), Month::Januari);
    assert_eq!(Month::Januari.prev(), Month::Desember);
    assert_eq!(Month::Mei.next(), Month::Juni);
    assert_eq!(Month::Mei.prev(), Month::April);
}

#[test]
fn test_month_parse() {
    assert_eq!(Month::parse("Maret"), Some(Month::Maret));
    assert_eq!(Month::parse("agustus"), Some(Month::Agustus));
    assert_eq!(Month::parse(" 12 "), Some(Month::Desember));
    assert_eq!(Month::parse("1"), Some(Month::Januari));
    assert_eq!(Month::parse("0"), None);
    assert_eq!(Month::parse("13"), None);
    assert_eq!(Month::parse("March"), None);
    assert!(Month::parse("now").is_some());
}

// ── Cell / SheetRow ───────────────────────────────────────────

#[test]
fn test_cell_display() {
    assert_eq!(Cell::Text("abc".into()).to_string(), "abc");
    assert_eq!(Cell::Number(dec!(1000.00)).to_string(), "1000");
    assert_eq!(Cell::Number(dec!(12.50)).to_string(), "12.5");
    assert_eq!(Cell::Bool(true).to_string(), "TRUE");
}

#[test]
fn test_cell_as_amount() {
    assert_eq!(Cell::Number(dec!(5)).as_amount(), dec!(5));
    assert_eq!(Cell::Text("750".into()).as_amount(), dec!(750));
    assert_eq!(Cell::Text("n/a".into()).as_amount(), Decimal::ZERO);
    assert_eq!(Cell::Bool(true).as_amount(), Decimal::ZERO);
}

#[test]
fn test_sheet_row_keeps_order_and_overwrites() {
    let mut row = SheetRow::new();
    row.insert("b", Cell::Number(dec!(1)));
    row.insert("a", Cell::Number(dec!(2)));
    row.insert("b", Cell::Number(dec!(3)));
    assert_eq!(row.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(row.get("b"), Some(&Cell::Number(dec!(3))));
    assert_eq!(row.len(), 2);
    assert!(row.get("c").is_none());
}

// ── Row ───────────────────────────────────────────────────────

#[test]
fn test_entered_row_columns() {
    let row = Row::Entered(BudgetLine::from_entry("A1", "ATK", "1000", "800", "500"));
    assert_eq!(row.column(Column::Code).as_deref(), Some("A1"));
    assert_eq!(row.column(Column::Allocation).as_deref(), Some("1000"));
    assert_eq!(row.column(Column::Variance).as_deref(), Some("300"));
    assert_eq!(row.column(Column::RemainingCeiling).as_deref(), Some("500"));
    assert_eq!(row.column(Column::Status).as_deref(), Some("Kurang"));
    assert_eq!(row.chart_values(), [dec!(1000), dec!(800), dec!(500)]);
}

#[test]
fn test_imported_row_has_no_derived_columns() {
    let row = Row::Imported(sheet_row(&[
        ("kode", Cell::Text("B2".into())),
        ("uraian", Cell::Text("Perjalanan".into())),
        ("rka", Cell::Number(dec!(2000))),
        ("rpd", Cell::Number(dec!(1500))),
        ("spj", Cell::Number(dec!(1800))),
    ]));
    assert_eq!(row.column(Column::Code).as_deref(), Some("B2"));
    assert_eq!(row.column(Column::Spend).as_deref(), Some("1800"));
    assert_eq!(row.column(Column::TotalRealization), None);
    assert_eq!(row.column(Column::Variance), None);
    assert_eq!(row.column(Column::RemainingCeiling), None);
    assert_eq!(row.column(Column::Status), None);
    assert_eq!(row.description(), "Perjalanan");
}

#[test]
fn test_imported_row_shows_sheet_supplied_status_verbatim() {
    let row = Row::Imported(sheet_row(&[("status", Cell::Text("Minus".into()))]));
    assert_eq!(row.column(Column::Status).as_deref(), Some("Minus"));
}

#[test]
fn test_imported_chart_values_default_to_zero() {
    let row = Row::Imported(sheet_row(&[
        ("rka", Cell::Text("900".into())),
        ("spj", Cell::Bool(false)),
    ]));
    assert_eq!(row.chart_values(), [dec!(900), Decimal::ZERO, Decimal::ZERO]);
}

#[test]
fn test_column_keys_and_headers() {
    let keys: Vec<&str> = Column::all().iter().map(|c| c.key()).collect();
    assert_eq!(
        keys,
        vec![
            "kode",
            "uraian",
            "rka",
            "rpd",
            "spj",
            "totalRealisasi",
            "selisih",
            "sisaPagu",
            "status"
        ]
    );
    assert_eq!(Column::RemainingCeiling.header(), "Sisa Pagu");
}
