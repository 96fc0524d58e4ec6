use std::io;

use crate::errors::Result;
use crate::ledger::{format_date, StatementView};

pub const EXPORT_HEADERS: [&str; 10] = [
    "Date",
    "Type",
    "Amount",
    "Interest Rate (%)",
    "Notes",
    "Duration",
    "Years Interest",
    "Months Interest",
    "Days Interest",
    "Current Value",
];

/// summary row with a label in the first column and a value in the last
fn summary_row(label: &str, second: &str, value: &str) -> [String; 10] {
    let mut row: [String; 10] = Default::default();
    row[0] = label.to_string();
    row[1] = second.to_string();
    row[9] = value.to_string();
    row
}

/// write a statement as csv: one row per transaction followed by the totals
pub fn write_csv<W: io::Write>(statement: &StatementView, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(EXPORT_HEADERS)?;

    for row in &statement.transactions {
        let b = &row.breakdown;
        writer.write_record([
            format_date(row.date),
            row.kind.label().to_string(),
            row.amount.to_fixed(2),
            row.interest_rate.as_percentage().to_string(),
            row.notes.clone(),
            b.duration.to_string(),
            b.years_interest.to_fixed(2),
            b.months_interest.to_fixed(2),
            b.days_interest.to_fixed(2),
            b.current_value.to_fixed(2),
        ])?;
    }

    let totals = &statement.totals;
    let currency = format!(
        "Currency: {} ({})",
        statement.client.currency, statement.currency_symbol
    );
    writer.write_record(summary_row("", "", ""))?;
    writer.write_record(summary_row("SUMMARY", &currency, ""))?;
    writer.write_record(summary_row("Total Loans", "", &totals.loan_total.to_fixed(2)))?;
    writer.write_record(summary_row("Total Repayments", "", &totals.repayment_total.to_fixed(2)))?;
    writer.write_record(summary_row("Net Outstanding Balance", "", &totals.net.to_fixed(2)))?;
    writer.flush()?;

    log::info!(
        "exported {} transactions for client {} as of {}",
        statement.transactions.len(),
        statement.client.id,
        statement.as_of
    );
    Ok(())
}

impl StatementView {
    /// render the statement as a csv string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        write_csv(self, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
