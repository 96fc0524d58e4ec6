/// ledger report - import a csv ledger, then print csv and json statements
use anniversary_interest::chrono::{TimeZone, Utc};
use anniversary_interest::ledger::ledger_file_name;
use anniversary_interest::{
    apply_interest_rate, import_csv, CalculatorConfig, Client, Decimal, PortfolioAggregator, Rate,
    SafeTimeProvider, StatementView, TimeSource,
};

const LEDGER: &str = "\
Date,Type,Amount,Interest Rate (%),Notes
10/06/2022,Loan,10000,2,working capital
14/02/2023,Repayment,3000,2,
30/09/2024,Loan,500,1.5,top up
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_json(r#"{ "currency": "USD" }"#)?;
    let transactions = import_csv(LEDGER.as_bytes(), &config)?;

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 11, 29, 0, 0, 0).single().ok_or("bad time")?,
    ));
    let as_of = time.now().date_naive();

    let client = Client::new("c-001", "Asha Traders", config.currency.clone());
    let aggregator = PortfolioAggregator::from_config(&config);
    let statement = StatementView::build(&client, &transactions, as_of, &aggregator);

    println!("{}", ledger_file_name(&client.id, as_of, "csv"));
    println!("{}", statement.to_csv_string()?);
    println!("{}", statement.to_json_pretty()?);

    // same ledger with every rate lowered to 1.5% a month
    let repriced = apply_interest_rate(&transactions, Rate::from_percentage(Decimal::new(15, 1)))?;
    let totals = aggregator.totals(&repriced, as_of);
    println!("net at 1.5%: {}", totals.net.to_fixed(2));

    Ok(())
}
