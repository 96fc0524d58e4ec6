pub mod accrual;
pub mod compound;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Duration;
use crate::decimal::Money;
use crate::types::Transaction;

pub use accrual::AccrualEngine;
pub use compound::{annual_interest, CompoundingSchedule, MONTHS_PER_ANNIVERSARY};

/// one anniversary at which a year of interest was added to principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingStep {
    /// calendar year label, the transaction year plus the anniversary number
    pub year: i32,
    pub date: NaiveDate,
    pub principal_before: Money,
    pub interest: Money,
    pub principal_after: Money,
}

/// full valuation of a transaction as of an evaluation date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    pub original_amount: Money,
    /// elapsed time since the transaction date
    pub duration: Duration,
    /// interest capitalised on anniversaries
    pub years_interest: Money,
    /// simple interest for whole months after the last anniversary
    pub months_interest: Money,
    /// simple interest for the remaining days
    pub days_interest: Money,
    pub current_value: Money,
    pub compounding_steps: Vec<CompoundingStep>,
}

impl CalculationBreakdown {
    /// breakdown of a transaction that has not started accruing
    pub fn not_started(original_amount: Money) -> Self {
        Self {
            original_amount,
            duration: Duration::ZERO,
            years_interest: Money::ZERO,
            months_interest: Money::ZERO,
            days_interest: Money::ZERO,
            current_value: Money::ZERO,
            compounding_steps: Vec::new(),
        }
    }

    /// breakdown of a transaction whose value left the decimal range; the
    /// anniversary steps are dropped and the value pinned at `Money::MAX`
    pub fn saturated(original_amount: Money, duration: Duration) -> Self {
        Self {
            original_amount,
            duration,
            years_interest: Money::MAX,
            months_interest: Money::ZERO,
            days_interest: Money::ZERO,
            current_value: Money::MAX,
            compounding_steps: Vec::new(),
        }
    }

    /// all interest accrued so far
    pub fn total_interest(&self) -> Money {
        self.years_interest + self.months_interest + self.days_interest
    }

    /// principal after the last anniversary
    pub fn compounded_principal(&self) -> Money {
        self.compounding_steps
            .last()
            .map(|step| step.principal_after)
            .unwrap_or(self.original_amount)
    }
}

/// value a transaction as of `as_of` with the default configuration
pub fn accrue(transaction: &Transaction, as_of: NaiveDate) -> CalculationBreakdown {
    AccrualEngine::default().accrue(transaction, as_of)
}
