/// quick start - value a single loan as of a date
use anniversary_interest::chrono::NaiveDate;
use anniversary_interest::{accrue, format_money, Decimal, Money, Rate, Transaction, TransactionKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000 lent at 2% per month
    let loan = Transaction::new(
        NaiveDate::from_ymd_opt(2022, 6, 10).ok_or("bad date")?,
        Money::from_major(10_000),
        Rate::from_percentage(Decimal::from(2)),
        TransactionKind::Loan,
        "quick start",
    )?;

    let as_of = NaiveDate::from_ymd_opt(2025, 11, 29).ok_or("bad date")?;
    let breakdown = accrue(&loan, as_of);

    println!("elapsed: {}", breakdown.duration);
    for step in &breakdown.compounding_steps {
        println!(
            "  {} ({}): {} + {} = {}",
            step.year, step.date, step.principal_before, step.interest, step.principal_after
        );
    }
    println!("months interest: {}", format_money(breakdown.months_interest, "INR"));
    println!("days interest:   {}", format_money(breakdown.days_interest, "INR"));
    println!("current value:   {}", format_money(breakdown.current_value, "INR"));

    Ok(())
}
