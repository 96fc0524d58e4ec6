pub mod anniversary;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub use anniversary::{anniversaries, anniversary_of, LeapDayPolicy};

/// elapsed civil time between two dates, as "X years, Y months, Z days"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        days: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

/// check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// exact number of days in the given month (1-12) of the given year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month out of range: {month}"),
    }
}

/// days in the month that contains `date`
pub fn days_in_month_of(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month())
}

/// days in the calendar month immediately before the month containing `date`
fn days_in_previous_month(date: NaiveDate) -> u32 {
    if date.month() == 1 {
        days_in_month(date.year() - 1, 12)
    } else {
        days_in_month(date.year(), date.month() - 1)
    }
}

/// decompose `to - from` into whole years, whole months and days.
///
/// Negative days borrow the length of the month before `to`'s month, negative
/// months borrow twelve from the years. A borrow that still leaves negative
/// days is clamped to zero.
///
/// `from` must not be after `to`. Debug builds assert this; release builds
/// return a clamped duration that carries no meaning.
pub fn years_months_days(from: NaiveDate, to: NaiveDate) -> Duration {
    debug_assert!(from <= to, "years_months_days called with {from} after {to}");

    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    let mut days = to.day() as i32 - from.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(to) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Duration {
        years: years.max(0) as u32,
        months: months.max(0) as u32,
        days: days.max(0) as u32,
    }
}
