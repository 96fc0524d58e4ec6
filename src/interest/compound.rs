use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::CompoundingStep;

/// an anniversary always carries exactly twelve months of the monthly rate
pub const MONTHS_PER_ANNIVERSARY: u32 = 12;

fn overflow(operation: &'static str) -> CalculatorError {
    CalculatorError::Overflow { operation }
}

/// simple interest for one full year at a monthly rate
pub fn annual_interest(principal: Money, monthly_rate: Rate) -> Result<Money> {
    principal
        .as_decimal()
        .checked_mul(monthly_rate.as_decimal())
        .and_then(|interest| interest.checked_mul(Decimal::from(MONTHS_PER_ANNIVERSARY)))
        .map(Money::from_decimal)
        .ok_or_else(|| overflow("computing anniversary interest"))
}

/// principal progression across a run of anniversaries
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundingSchedule {
    pub steps: Vec<CompoundingStep>,
    /// principal after the last step
    pub principal: Money,
    pub total_interest: Money,
}

impl CompoundingSchedule {
    /// capitalise a year of interest on each anniversary, in order.
    ///
    /// Fails with `Overflow` once the principal outgrows the decimal range.
    pub fn build(
        principal: Money,
        monthly_rate: Rate,
        start_year: i32,
        anniversaries: &[NaiveDate],
    ) -> Result<Self> {
        let mut steps = Vec::with_capacity(anniversaries.len());
        let mut principal = principal;
        let mut total_interest = Money::ZERO;

        for (index, &date) in anniversaries.iter().enumerate() {
            let interest = annual_interest(principal, monthly_rate)?;
            let step = CompoundingStep {
                year: start_year + index as i32 + 1,
                date,
                principal_before: principal,
                interest,
                principal_after: principal
                    .checked_add(interest)
                    .ok_or_else(|| overflow("capitalising anniversary interest"))?,
            };
            log::trace!(
                "anniversary {} ({}): {} + {} = {}",
                index + 1,
                date,
                step.principal_before,
                step.interest,
                step.principal_after
            );

            total_interest = total_interest
                .checked_add(interest)
                .ok_or_else(|| overflow("summing anniversary interest"))?;
            principal = step.principal_after;
            steps.push(step);
        }

        Ok(Self {
            steps,
            principal,
            total_interest,
        })
    }

    /// last anniversary reached, if any
    pub fn last_anniversary(&self) -> Option<NaiveDate> {
        self.steps.last().map(|step| step.date)
    }
}
