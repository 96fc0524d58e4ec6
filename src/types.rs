use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};

/// unique identifier for a transaction
pub type TransactionId = Uuid;

/// direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// money lent out, counts toward the outstanding balance
    Loan,
    /// money paid back, offsets loans
    Repayment,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Loan => "Loan",
            TransactionKind::Repayment => "Repayment",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loan" => Ok(TransactionKind::Loan),
            "repayment" => Ok(TransactionKind::Repayment),
            _ => Err(CalculatorError::InvalidTransactionKind {
                value: s.to_string(),
            }),
        }
    }
}

/// a dated principal movement; always holds a positive amount and a non-negative rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    amount: Money,
    interest_rate: Rate,
    kind: TransactionKind,
    notes: String,
}

impl Transaction {
    /// create a validated transaction with a fresh id
    pub fn new(
        date: NaiveDate,
        amount: Money,
        interest_rate: Rate,
        kind: TransactionKind,
        notes: impl Into<String>,
    ) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), date, amount, interest_rate, kind, notes)
    }

    /// create a validated transaction keeping a caller supplied id
    pub fn with_id(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        interest_rate: Rate,
        kind: TransactionKind,
        notes: impl Into<String>,
    ) -> Result<Self> {
        if !amount.is_positive() {
            return Err(CalculatorError::InvalidAmount { amount });
        }
        if interest_rate.is_negative() {
            return Err(CalculatorError::InvalidInterestRate {
                rate: interest_rate,
            });
        }

        Ok(Self {
            id,
            date,
            amount,
            interest_rate,
            kind,
            notes: notes.into(),
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// monthly interest rate
    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// copy of this transaction, same id, at a new monthly rate
    pub fn with_interest_rate(&self, interest_rate: Rate) -> Result<Self> {
        Self::with_id(
            self.id,
            self.date,
            self.amount,
            interest_rate,
            self.kind,
            self.notes.clone(),
        )
    }
}

/// set one monthly rate on every transaction; a negative rate is rejected
/// even for an empty list
pub fn apply_interest_rate(transactions: &[Transaction], interest_rate: Rate) -> Result<Vec<Transaction>> {
    if interest_rate.is_negative() {
        return Err(CalculatorError::InvalidInterestRate { rate: interest_rate });
    }
    let updated = transactions
        .iter()
        .map(|tx| tx.with_interest_rate(interest_rate))
        .collect::<Result<Vec<_>>>()?;
    log::info!(
        "updated interest rate to {} for {} transactions",
        interest_rate,
        updated.len()
    );
    Ok(updated)
}

/// unvalidated wire form of a transaction
#[derive(Debug, Clone, Deserialize)]
struct TransactionRecord {
    id: TransactionId,
    date: NaiveDate,
    amount: Money,
    interest_rate: Rate,
    kind: TransactionKind,
    #[serde(default)]
    notes: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = CalculatorError;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        Transaction::with_id(
            record.id,
            record.date,
            record.amount,
            record.interest_rate,
            record.kind,
            record.notes,
        )
    }
}

/// client a ledger belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    /// currency code such as "INR" or "USD"
    pub currency: String,
}

impl Client {
    pub fn new(id: impl Into<String>, name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            currency: currency.into(),
        }
    }
}
