use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid transaction type: {value:?}, must be \"Loan\" or \"Repayment\"")]
    InvalidTransactionKind {
        value: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("missing column: {column}")]
    MissingColumn {
        column: String,
    },

    #[error("import failed at line {line}: {message}")]
    ImportRow {
        line: u64,
        message: String,
    },

    #[error("arithmetic overflow while {operation}")]
    Overflow {
        operation: &'static str,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
