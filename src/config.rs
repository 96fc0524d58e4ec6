use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calendar::LeapDayPolicy;
use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};
use crate::portfolio::SortOrder;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// placement of feb 29 anniversaries in non-leap years
    pub leap_day_policy: LeapDayPolicy,
    /// monthly rate in percent applied to imported rows without one
    pub default_interest_rate: Decimal,
    /// currency code used for formatting and reports
    pub currency: String,
    /// row order of statements and exports
    pub sort_order: SortOrder,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            leap_day_policy: LeapDayPolicy::RollForward,
            default_interest_rate: dec!(2),
            currency: "INR".to_string(),
            sort_order: SortOrder::Chronological,
        }
    }
}

impl CalculatorConfig {
    /// parse from json, missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn with_default_interest_rate(mut self, percent: Decimal) -> Self {
        self.default_interest_rate = percent;
        self
    }

    pub fn default_rate(&self) -> Rate {
        Rate::from_percentage(self.default_interest_rate)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_interest_rate < Decimal::ZERO {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "default interest rate must not be negative, got {}",
                    self.default_interest_rate
                ),
            });
        }
        if self.currency.trim().is_empty() {
            return Err(CalculatorError::InvalidConfiguration {
                message: "currency code must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
