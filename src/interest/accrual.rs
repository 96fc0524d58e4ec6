use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;

use crate::calendar::{anniversaries, days_in_month_of, years_months_days, LeapDayPolicy};
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::{CalculationBreakdown, CompoundingSchedule};
use crate::types::Transaction;

/// engine for valuing transactions: yearly compounding on anniversaries, simple
/// interest for the part of the year after the last one
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    pub leap_day_policy: LeapDayPolicy,
}

impl AccrualEngine {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            leap_day_policy: config.leap_day_policy,
        }
    }

    /// simple interest for whole months, one unit of the monthly rate each
    pub fn calculate_months_interest(
        &self,
        principal: Money,
        monthly_rate: Rate,
        months: u32,
    ) -> Result<Money> {
        if months == 0 || monthly_rate.is_zero() {
            return Ok(Money::ZERO);
        }
        principal
            .as_decimal()
            .checked_mul(monthly_rate.as_decimal())
            .and_then(|interest| interest.checked_mul(Decimal::from(months)))
            .map(Money::from_decimal)
            .ok_or(CalculatorError::Overflow {
                operation: "computing months interest",
            })
    }

    /// simple interest for leftover days, prorated by the length of the
    /// evaluation date's month
    pub fn calculate_days_interest(
        &self,
        principal: Money,
        monthly_rate: Rate,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<Money> {
        if days == 0 || monthly_rate.is_zero() {
            return Ok(Money::ZERO);
        }
        let daily_rate = monthly_rate.per_day(days_in_month_of(as_of));
        principal
            .as_decimal()
            .checked_mul(daily_rate.as_decimal())
            .and_then(|interest| interest.checked_mul(Decimal::from(days)))
            .map(Money::from_decimal)
            .ok_or(CalculatorError::Overflow {
                operation: "computing days interest",
            })
    }

    /// value a transaction as of the given date, failing with `Overflow` when
    /// the compounded value leaves the decimal range
    pub fn try_accrue(&self, transaction: &Transaction, as_of: NaiveDate) -> Result<CalculationBreakdown> {
        let start = transaction.date();
        if start > as_of {
            log::debug!(
                "transaction {} dated {} is after {}, nothing accrued",
                transaction.id(),
                start,
                as_of
            );
            return Ok(CalculationBreakdown::not_started(transaction.amount()));
        }

        let rate = transaction.interest_rate();
        let duration = years_months_days(start, as_of);

        let dates = anniversaries(start, as_of, self.leap_day_policy);
        let schedule = CompoundingSchedule::build(transaction.amount(), rate, start.year(), &dates)?;
        let principal = schedule.principal;

        let remainder_base = schedule.last_anniversary().unwrap_or(start);
        let remainder = years_months_days(remainder_base, as_of);
        // a clamped feb 28 anniversary can sit a full year before the next feb 29
        let remainder_months = remainder.years * 12 + remainder.months;

        let months_interest = self.calculate_months_interest(principal, rate, remainder_months)?;
        let days_interest = self.calculate_days_interest(principal, rate, remainder.days, as_of)?;
        let current_value = principal
            .checked_add(months_interest)
            .and_then(|value| value.checked_add(days_interest))
            .ok_or(CalculatorError::Overflow {
                operation: "adding remainder interest",
            })?;

        log::debug!(
            "transaction {}: {} anniversaries, remainder {} from {}, value {}",
            transaction.id(),
            schedule.steps.len(),
            remainder,
            remainder_base,
            current_value
        );

        Ok(CalculationBreakdown {
            original_amount: transaction.amount(),
            duration,
            years_interest: schedule.total_interest,
            months_interest,
            days_interest,
            current_value,
            compounding_steps: schedule.steps,
        })
    }

    /// value a transaction as of the given date.
    ///
    /// Never fails: a value beyond the decimal range saturates at `Money::MAX`.
    pub fn accrue(&self, transaction: &Transaction, as_of: NaiveDate) -> CalculationBreakdown {
        match self.try_accrue(transaction, as_of) {
            Ok(breakdown) => breakdown,
            Err(err) => {
                log::warn!(
                    "transaction {} as of {}: {}, value saturated",
                    transaction.id(),
                    as_of,
                    err
                );
                CalculationBreakdown::saturated(
                    transaction.amount(),
                    years_months_days(transaction.date(), as_of),
                )
            }
        }
    }

    /// value a transaction as of the provider's current date
    pub fn accrue_today(
        &self,
        transaction: &Transaction,
        time_provider: &SafeTimeProvider,
    ) -> CalculationBreakdown {
        let today = time_provider.now().date_naive();
        self.accrue(transaction, today)
    }
}
