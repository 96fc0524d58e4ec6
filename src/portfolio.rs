use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::interest::{AccrualEngine, CalculationBreakdown};
use crate::types::{Transaction, TransactionKind};

/// order in which transactions are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// oldest first, entries sharing a date keep their entry order
    #[default]
    Chronological,
    /// as entered
    Entry,
}

impl SortOrder {
    pub fn arrange<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        if *self == SortOrder::Chronological {
            // stable, so same-day entries stay in entry order
            ordered.sort_by_key(|tx| tx.date());
        }
        ordered
    }
}

/// current values summed per transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub loan_total: Money,
    pub repayment_total: Money,
    /// loans minus repayments
    pub net: Money,
}

impl PortfolioTotals {
    fn from_buckets(loan_total: Money, repayment_total: Money) -> Self {
        Self {
            loan_total,
            repayment_total,
            net: loan_total - repayment_total,
        }
    }
}

/// sums the current value of many transactions
#[derive(Debug, Clone, Default)]
pub struct PortfolioAggregator {
    engine: AccrualEngine,
    order: SortOrder,
}

impl PortfolioAggregator {
    pub fn new(engine: AccrualEngine) -> Self {
        Self {
            engine,
            order: SortOrder::default(),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(AccrualEngine::new(config)).with_sort_order(config.sort_order)
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// breakdown for every transaction, listed in the aggregator's sort order
    pub fn breakdowns<'a>(
        &self,
        transactions: &'a [Transaction],
        as_of: NaiveDate,
    ) -> Vec<(&'a Transaction, CalculationBreakdown)> {
        self.order
            .arrange(transactions)
            .into_iter()
            .map(|tx| (tx, self.engine.accrue(tx, as_of)))
            .collect()
    }

    /// loan, repayment and net totals as of the given date
    #[cfg(not(feature = "parallel"))]
    pub fn totals(&self, transactions: &[Transaction], as_of: NaiveDate) -> PortfolioTotals {
        let (loans, repayments) = transactions
            .iter()
            .map(|tx| self.bucket(tx, as_of))
            .fold((Money::ZERO, Money::ZERO), |(l, r), (dl, dr)| (l + dl, r + dr));

        self.finish(transactions.len(), loans, repayments, as_of)
    }

    /// loan, repayment and net totals as of the given date
    #[cfg(feature = "parallel")]
    pub fn totals(&self, transactions: &[Transaction], as_of: NaiveDate) -> PortfolioTotals {
        use rayon::prelude::*;

        let (loans, repayments) = transactions
            .par_iter()
            .map(|tx| self.bucket(tx, as_of))
            .reduce(
                || (Money::ZERO, Money::ZERO),
                |(l, r), (dl, dr)| (l + dl, r + dr),
            );

        self.finish(transactions.len(), loans, repayments, as_of)
    }

    /// current value placed in the loan or repayment slot
    fn bucket(&self, transaction: &Transaction, as_of: NaiveDate) -> (Money, Money) {
        let value = self.engine.accrue(transaction, as_of).current_value;
        match transaction.kind() {
            TransactionKind::Loan => (value, Money::ZERO),
            TransactionKind::Repayment => (Money::ZERO, value),
        }
    }

    fn finish(&self, count: usize, loans: Money, repayments: Money, as_of: NaiveDate) -> PortfolioTotals {
        let totals = PortfolioTotals::from_buckets(loans, repayments);
        log::debug!(
            "{} transactions as of {}: loans {}, repayments {}, net {}",
            count,
            as_of,
            totals.loan_total,
            totals.repayment_total,
            totals.net
        );
        totals
    }
}

/// portfolio totals with the default configuration
pub fn totals(transactions: &[Transaction], as_of: NaiveDate) -> PortfolioTotals {
    PortfolioAggregator::default().totals(transactions, as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(on: NaiveDate, amount: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(on, Money::from_major(amount), Rate::ZERO, kind, "").unwrap()
    }

    #[test]
    fn test_loan_minus_repayment() {
        let as_of = date(2024, 6, 1);
        let transactions = vec![
            tx(date(2024, 1, 1), 100, TransactionKind::Loan),
            tx(date(2024, 2, 1), 40, TransactionKind::Repayment),
        ];

        let result = totals(&transactions, as_of);

        assert_eq!(result.loan_total, Money::from_major(100));
        assert_eq!(result.repayment_total, Money::from_major(40));
        assert_eq!(result.net, Money::from_major(60));
    }

    #[test]
    fn test_order_independent() {
        let as_of = date(2025, 11, 29);
        let mut transactions = vec![
            Transaction::new(
                date(2022, 6, 10),
                Money::from_major(10_000),
                Rate::from_percentage(dec!(2)),
                TransactionKind::Loan,
                "",
            )
            .unwrap(),
            Transaction::new(
                date(2023, 2, 14),
                Money::from_major(3_000),
                Rate::from_percentage(dec!(1.5)),
                TransactionKind::Repayment,
                "",
            )
            .unwrap(),
            tx(date(2024, 9, 30), 500, TransactionKind::Loan),
        ];

        let forward = totals(&transactions, as_of);
        transactions.reverse();
        let backward = totals(&transactions, as_of);

        assert_eq!(forward, backward);
        assert_eq!(forward.net, forward.loan_total - forward.repayment_total);
    }

    #[test]
    fn test_future_transactions_count_as_zero() {
        let transactions = vec![
            tx(date(2024, 1, 1), 100, TransactionKind::Loan),
            tx(date(2030, 1, 1), 999, TransactionKind::Repayment),
        ];

        let result = totals(&transactions, date(2024, 6, 1));

        assert_eq!(result.repayment_total, Money::ZERO);
        assert_eq!(result.net, Money::from_major(100));
    }

    #[test]
    fn test_repayments_can_exceed_loans() {
        let transactions = vec![
            tx(date(2024, 1, 1), 100, TransactionKind::Loan),
            tx(date(2024, 1, 1), 150, TransactionKind::Repayment),
        ];

        let result = totals(&transactions, date(2024, 1, 1));

        assert_eq!(result.net, Money::from_major(-50));
    }

    #[test]
    fn test_empty_portfolio() {
        assert_eq!(totals(&[], date(2024, 1, 1)), PortfolioTotals::default());
    }

    #[test]
    fn test_breakdowns_default_to_chronological() {
        let transactions = vec![
            tx(date(2024, 1, 1), 100, TransactionKind::Loan),
            tx(date(2023, 1, 1), 200, TransactionKind::Repayment),
            tx(date(2023, 1, 1), 300, TransactionKind::Loan),
        ];

        let rows = PortfolioAggregator::default().breakdowns(&transactions, date(2024, 1, 1));

        let ids: Vec<_> = rows.iter().map(|(tx, _)| tx.id()).collect();
        assert_eq!(ids, vec![transactions[1].id(), transactions[2].id(), transactions[0].id()]);
        assert_eq!(rows[0].1.current_value, Money::from_major(200));
    }

    #[test]
    fn test_breakdowns_in_entry_order() {
        let transactions = vec![
            tx(date(2024, 1, 1), 100, TransactionKind::Loan),
            tx(date(2023, 1, 1), 200, TransactionKind::Repayment),
        ];
        let config = CalculatorConfig::default().with_sort_order(SortOrder::Entry);

        let rows = PortfolioAggregator::from_config(&config).breakdowns(&transactions, date(2024, 1, 1));

        assert_eq!(rows[0].0.id(), transactions[0].id());
        assert_eq!(rows[1].0.id(), transactions[1].id());
    }

    #[test]
    fn test_sort_order_does_not_change_totals() {
        let transactions = vec![
            tx(date(2024, 3, 1), 100, TransactionKind::Loan),
            tx(date(2022, 1, 1), 40, TransactionKind::Repayment),
        ];
        let as_of = date(2024, 6, 1);

        let chronological = PortfolioAggregator::default().totals(&transactions, as_of);
        let entry = PortfolioAggregator::default()
            .with_sort_order(SortOrder::Entry)
            .totals(&transactions, as_of);

        assert_eq!(chronological, entry);
    }

    #[test]
    fn test_overflowing_loan_saturates_totals() {
        let transactions = vec![
            Transaction::new(
                date(1990, 1, 1),
                Money::from_major(1_000_000),
                Rate::from_percentage(dec!(50)),
                TransactionKind::Loan,
                "",
            )
            .unwrap(),
            tx(date(2020, 1, 1), 100, TransactionKind::Repayment),
        ];

        let result = totals(&transactions, date(2024, 1, 1));

        assert_eq!(result.loan_total, Money::MAX);
        assert_eq!(result.repayment_total, Money::from_major(100));
        assert_eq!(result.net, Money::MAX - Money::from_major(100));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_totals_match_sequential_sum() {
        let as_of = date(2025, 11, 29);
        let transactions: Vec<Transaction> = (0..500)
            .map(|i| {
                let kind = if i % 3 == 0 { TransactionKind::Repayment } else { TransactionKind::Loan };
                Transaction::new(
                    date(2000, 1, 1) + chrono::Duration::days(i * 17),
                    Money::from_major(100 + i),
                    Rate::from_percentage(dec!(1.5)),
                    kind,
                    "",
                )
                .unwrap()
            })
            .collect();

        let aggregator = PortfolioAggregator::default();
        let (mut loans, mut repayments) = (Money::ZERO, Money::ZERO);
        for (tx, breakdown) in aggregator.breakdowns(&transactions, as_of) {
            match tx.kind() {
                TransactionKind::Loan => loans += breakdown.current_value,
                TransactionKind::Repayment => repayments += breakdown.current_value,
            }
        }

        let result = aggregator.totals(&transactions, as_of);

        assert_eq!(result.loan_total, loans);
        assert_eq!(result.repayment_total, repayments);
        assert_eq!(result.net, loans - repayments);
    }
}
