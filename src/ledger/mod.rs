//! ledger import and export: csv in and out, json statements

pub mod export;
pub mod import;
pub mod serialization;

use chrono::NaiveDate;

use crate::errors::{CalculatorError, Result};

pub use export::{write_csv, EXPORT_HEADERS};
pub use import::import_csv;
pub use serialization::{StatementView, TransactionView};

/// render a date as DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// parse DD/MM/YYYY (one or two digit day and month) or ISO YYYY-MM-DD
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    let invalid = || CalculatorError::InvalidDate {
        message: format!("invalid date format: {input}"),
    };

    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() == 3 {
        let [day, month, year] = [parts[0], parts[1], parts[2]];
        let digits = |s: &str, min: usize, max: usize| {
            (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
        };
        if !(digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4)) {
            return Err(invalid());
        }
        let (day, month, year) = (
            day.parse::<u32>().map_err(|_| invalid())?,
            month.parse::<u32>().map_err(|_| invalid())?,
            year.parse::<i32>().map_err(|_| invalid())?,
        );
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

/// file name for an exported ledger, e.g. `interest-calculator-c1-2025-11-29.csv`
pub fn ledger_file_name(client_id: &str, as_of: NaiveDate, extension: &str) -> String {
    format!(
        "interest-calculator-{}-{}.{}",
        client_id,
        as_of.format("%Y-%m-%d"),
        extension
    )
}
