/// serialization support for ledger statements
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::currency_symbol;
use crate::decimal::{Money, Rate};
use crate::interest::CalculationBreakdown;
use crate::portfolio::{PortfolioAggregator, PortfolioTotals};
use crate::types::{Client, Transaction, TransactionId, TransactionKind};

/// serializable view of one transaction and its valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionView {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Money,
    pub interest_rate: Rate,
    pub notes: String,
    pub breakdown: CalculationBreakdown,
}

impl TransactionView {
    pub fn new(transaction: &Transaction, breakdown: CalculationBreakdown) -> Self {
        TransactionView {
            id: transaction.id(),
            date: transaction.date(),
            kind: transaction.kind(),
            amount: transaction.amount(),
            interest_rate: transaction.interest_rate(),
            notes: transaction.notes().to_string(),
            breakdown,
        }
    }
}

/// serializable view of a client's ledger as of a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementView {
    pub client: Client,
    pub as_of: NaiveDate,
    pub currency_symbol: String,
    pub transactions: Vec<TransactionView>,
    pub totals: PortfolioTotals,
}

impl StatementView {
    /// rows follow the aggregator's sort order
    pub fn build(
        client: &Client,
        transactions: &[Transaction],
        as_of: NaiveDate,
        aggregator: &PortfolioAggregator,
    ) -> Self {
        let rows = aggregator
            .breakdowns(transactions, as_of)
            .into_iter()
            .map(|(tx, breakdown)| TransactionView::new(tx, breakdown))
            .collect();

        StatementView {
            client: client.clone(),
            as_of,
            currency_symbol: currency_symbol(&client.currency).to_string(),
            transactions: rows,
            totals: aggregator.totals(transactions, as_of),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
