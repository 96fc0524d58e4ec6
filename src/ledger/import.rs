use std::io;

use csv::StringRecord;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::ledger::parse_date;
use crate::types::{Transaction, TransactionKind};

const DATE_HEADERS: &[&str] = &["date"];
const TYPE_HEADERS: &[&str] = &["type"];
const AMOUNT_HEADERS: &[&str] = &["amount"];
const RATE_HEADERS: &[&str] = &["interest rate (%)", "interest rate", "interestrate"];
const NOTES_HEADERS: &[&str] = &["notes"];

/// positions of the recognised columns in the header row
#[derive(Debug)]
struct Columns {
    date: usize,
    kind: usize,
    amount: usize,
    rate: Option<usize>,
    notes: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };
        let require = |names: &[&str], label: &str| {
            find(names).ok_or_else(|| CalculatorError::MissingColumn {
                column: label.to_string(),
            })
        };

        Ok(Columns {
            date: require(DATE_HEADERS, "Date")?,
            kind: require(TYPE_HEADERS, "Type")?,
            amount: require(AMOUNT_HEADERS, "Amount")?,
            rate: find(RATE_HEADERS),
            notes: find(NOTES_HEADERS),
        })
    }
}

fn field<'r>(record: &'r StringRecord, index: Option<usize>) -> &'r str {
    index.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
}

fn parse_row(record: &StringRecord, columns: &Columns, config: &CalculatorConfig) -> Result<Transaction> {
    let date_field = field(record, Some(columns.date));
    if date_field.is_empty() {
        return Err(CalculatorError::InvalidDate {
            message: "date is required".to_string(),
        });
    }
    let date = parse_date(date_field)?;

    let kind: TransactionKind = field(record, Some(columns.kind)).parse()?;

    let amount_field = field(record, Some(columns.amount));
    let amount = Money::from_str_exact(amount_field).map_err(|_| CalculatorError::InvalidAmount {
        amount: Money::ZERO,
    })?;

    let rate_field = field(record, columns.rate);
    let rate = if rate_field.is_empty() {
        config.default_rate()
    } else {
        Rate::from_percentage_str(rate_field).map_err(|_| CalculatorError::InvalidInterestRate {
            rate: Rate::ZERO,
        })?
    };

    Transaction::new(date, amount, rate, kind, field(record, columns.notes))
}

/// read transactions from csv with a header row.
///
/// Every row must be valid; the first bad row aborts the import with its line
/// number. Imported transactions get fresh ids.
pub fn import_csv<R: io::Read>(reader: R, config: &CalculatorConfig) -> Result<Vec<Transaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::locate(reader.headers()?)?;
    let mut transactions = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&record, &columns, config) {
            Ok(tx) => transactions.push(tx),
            Err(err) => {
                let message = match err {
                    CalculatorError::InvalidAmount { .. } => {
                        format!("invalid amount: {:?}", field(&record, Some(columns.amount)))
                    }
                    CalculatorError::InvalidInterestRate { .. } => {
                        format!("invalid interest rate: {:?}", field(&record, columns.rate))
                    }
                    other => other.to_string(),
                };
                log::warn!("rejecting csv import at line {line}: {message}");
                return Err(CalculatorError::ImportRow { line, message });
            }
        }
    }

    log::info!("imported {} transactions from csv", transactions.len());
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_import_basic() {
        let data = "\
Date,Type,Amount,Interest Rate (%),Notes
21/06/2022,Loan,10000,2,first loan
2023-01-15,repayment,2500.50,1.5,
";
        let transactions = import_csv(data.as_bytes(), &CalculatorConfig::default()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].date(), date(2022, 6, 21));
        assert_eq!(transactions[0].kind(), TransactionKind::Loan);
        assert_eq!(transactions[0].amount(), Money::from_major(10_000));
        assert_eq!(transactions[0].notes(), "first loan");
        assert_eq!(transactions[1].kind(), TransactionKind::Repayment);
        assert_eq!(transactions[1].amount(), Money::from_str_exact("2500.5").unwrap());
        assert_eq!(transactions[1].interest_rate(), Rate::from_percentage(dec!(1.5)));
        assert_ne!(transactions[0].id(), transactions[1].id());
    }

    #[test]
    fn test_lowercase_headers_and_default_rate() {
        let data = "date,type,amount,notes\n1/2/2024,LOAN,300,\n";
        let config = CalculatorConfig::default().with_default_interest_rate(dec!(3));

        let transactions = import_csv(data.as_bytes(), &config).unwrap();

        assert_eq!(transactions[0].date(), date(2024, 2, 1));
        assert_eq!(transactions[0].interest_rate(), Rate::from_percentage(dec!(3)));
    }

    #[test]
    fn test_alternate_rate_header() {
        let data = "Date,Type,Amount,interestRate\n2024-01-01,Loan,10,0\n";
        let transactions = import_csv(data.as_bytes(), &CalculatorConfig::default()).unwrap();
        assert!(transactions[0].interest_rate().is_zero());
    }

    #[test]
    fn test_skips_blank_rows() {
        let data = "Date,Type,Amount\n2024-01-01,Loan,10\n,,\n2024-02-01,Repayment,5\n";
        let transactions = import_csv(data.as_bytes(), &CalculatorConfig::default()).unwrap();
        assert_eq!(transactions.len(), 2);
    }

    #[test]
    fn test_missing_column() {
        let data = "Date,Amount\n2024-01-01,10\n";
        let result = import_csv(data.as_bytes(), &CalculatorConfig::default());
        assert!(matches!(
            result,
            Err(CalculatorError::MissingColumn { column }) if column == "Type"
        ));
    }

    #[test]
    fn test_rejects_bad_rows() {
        let cases = [
            ("Date,Type,Amount\n2024-01-01,Gift,10\n", "Gift"),
            ("Date,Type,Amount\n2024-01-01,Loan,0\n", "amount"),
            ("Date,Type,Amount\n2024-01-01,Loan,abc\n", "abc"),
            ("Date,Type,Amount,Interest Rate (%)\n2024-01-01,Loan,5,-2\n", "interest rate"),
            ("Date,Type,Amount\n31/13/2024,Loan,5\n", "31/13/2024"),
            ("Date,Type,Amount\n,Loan,5\n", "date is required"),
        ];

        for (data, needle) in cases {
            match import_csv(data.as_bytes(), &CalculatorConfig::default()) {
                Err(CalculatorError::ImportRow { line, message }) => {
                    assert_eq!(line, 2, "{data}");
                    assert!(message.contains(needle), "{message} should mention {needle}");
                }
                other => panic!("expected row error for {data:?}, got {other:?}"),
            }
        }
    }
}
