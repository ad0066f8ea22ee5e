use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Derived, Status};

/// Derive realization, variance, remaining ceiling and status from the
/// three planned/actual amounts. Total over every input: differences
/// beyond `Decimal`'s range clamp to `Decimal::MAX` / `Decimal::MIN`.
pub fn compute(allocation: Decimal, disbursement: Decimal, spend: Decimal) -> Derived {
    let total_realization = spend;
    let variance = disbursement.saturating_sub(spend);
    let remaining_ceiling = allocation.saturating_sub(total_realization);

    // A ceiling of exactly zero is Safe even when under-disbursed.
    let status = if remaining_ceiling < Decimal::ZERO {
        Status::Overrun
    } else if remaining_ceiling > Decimal::ZERO && spend < disbursement {
        Status::Short
    } else {
        Status::Safe
    };

    Derived {
        total_realization,
        variance,
        remaining_ceiling,
        status,
    }
}

/// Lenient amount parsing for form input.
///
/// Leading whitespace is skipped and the longest numeric prefix is used
/// (`"12abc"` reads as 12, `"1e3"` as 1000). Empty, non-numeric or
/// out-of-range input yields zero instead of an error.
pub fn parse_amount(input: &str) -> Decimal {
    let Some(prefix) = numeric_prefix(input.trim_start()) else {
        return Decimal::ZERO;
    };
    let parsed = if prefix.contains(['e', 'E']) {
        Decimal::from_scientific(&prefix)
    } else {
        Decimal::from_str(&prefix)
    };
    match parsed {
        Ok(d) if d.is_zero() => Decimal::ZERO,
        Ok(d) => d,
        Err(_) => Decimal::ZERO,
    }
}

/// Canonical form of the leading number in `s`: optional `-`, at least one
/// integer digit, an optional fraction and an optional exponent. Returns
/// `None` when `s` does not start with a number.
fn numeric_prefix(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &s[frac_start..j];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            i = j;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        let mut exp = String::new();
        if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
            if bytes[j] == b'-' {
                exp.push('-');
            }
            j += 1;
        }
        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            exp.push_str(&s[digits_start..j]);
            exponent = exp;
        }
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        out.push('e');
        out.push_str(&exponent);
    }
    Some(out)
}
