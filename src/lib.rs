pub mod calendar;
pub mod config;
pub mod currency;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod ledger;
pub mod portfolio;
pub mod types;

// re-export key types
pub use calendar::{anniversaries, days_in_month, years_months_days, Duration, LeapDayPolicy};
pub use config::CalculatorConfig;
pub use currency::{currency_symbol, format_money};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use interest::{accrue, AccrualEngine, CalculationBreakdown, CompoundingStep};
pub use ledger::{import_csv, write_csv, StatementView, TransactionView};
pub use portfolio::{totals, PortfolioAggregator, PortfolioTotals, SortOrder};
pub use types::{apply_interest_rate, Client, Transaction, TransactionId, TransactionKind};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
