//! Lenient parsing of spreadsheet cell values.
//!
//! Pasted payroll data carries currency symbols, thousands separators and
//! assorted date formats. Amounts degrade to zero when unparseable; hire
//! dates go through a digit-group heuristic before generic parsing, and
//! only a date that survives no interpretation rejects the row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::Cell;

/// Date formats tried when the digit-group heuristic does not apply.
const FALLBACK_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Parses a monetary amount from a cell.
///
/// Text cells are stripped of every character except digits, `.` and `-`
/// before conversion; a value that still fails to parse is treated as
/// zero.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::parse_amount;
/// use nomina_engine::models::Cell;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cell = Cell::Text("$12,345.60 MXN".to_string());
/// assert_eq!(parse_amount(&cell), Decimal::from_str("12345.60").unwrap());
///
/// let junk = Cell::Text("n/a".to_string());
/// assert_eq!(parse_amount(&junk), Decimal::ZERO);
/// ```
pub fn parse_amount(cell: &Cell) -> Decimal {
    match cell {
        Cell::Number(value) => *value,
        Cell::Text(raw) => {
            let cleaned: String = raw
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
        }
    }
}

/// Parses a hire date from raw cell text.
///
/// Extracts the numeric groups from the text; when exactly three are
/// found, day/month/year are disambiguated by range plausibility
/// (day ≤ 31, month ≤ 12, year > 1900), trying day-month-year first and
/// year-month-day second. Otherwise, or when disambiguation fails, the
/// raw text is retried against a list of common date formats. Returns
/// `None` when no interpretation yields a valid date.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::parse_hire_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2021, 6, 5).unwrap();
/// assert_eq!(parse_hire_date("05/06/2021"), Some(expected));
/// assert_eq!(parse_hire_date("2021-06-05"), Some(expected));
/// assert_eq!(parse_hire_date("hired on 5.6.2021"), Some(expected));
/// assert_eq!(parse_hire_date("unknown"), None);
/// ```
pub fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let groups = numeric_groups(raw);
    if groups.len() == 3 {
        let (p1, p2, p3) = (groups[0], groups[1], groups[2]);

        if (1..=31).contains(&p1) && (1..=12).contains(&p2) && p3 > 1900 {
            if let Some(date) = NaiveDate::from_ymd_opt(p3 as i32, p2 as u32, p1 as u32) {
                return Some(date);
            }
        }
        if p1 > 1900 && (1..=12).contains(&p2) && (1..=31).contains(&p3) {
            if let Some(date) = NaiveDate::from_ymd_opt(p1 as i32, p2 as u32, p3 as u32) {
                return Some(date);
            }
        }
    }

    let trimmed = raw.trim();
    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Collects the runs of consecutive digits in the text.
fn numeric_groups(raw: &str) -> Vec<i64> {
    let mut groups = Vec::new();
    let mut current = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            groups.push(current.parse::<i64>().unwrap_or(i64::MAX));
            current.clear();
        }
    }
    if !current.is_empty() {
        groups.push(current.parse::<i64>().unwrap_or(i64::MAX));
    }
    groups
}
