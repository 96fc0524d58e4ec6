use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// how a feb 29 start date lands in a non-leap anniversary year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// move to march 1
    #[default]
    RollForward,
    /// move to february 28
    ClampToMonthEnd,
}

/// the date `years` whole years after `from`, same month and day
pub fn anniversary_of(from: NaiveDate, years: u32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    let year = from.year().checked_add(i32::try_from(years).ok()?)?;

    match NaiveDate::from_ymd_opt(year, from.month(), from.day()) {
        Some(date) => Some(date),
        // only feb 29 can fail for a valid source date
        None => match policy {
            LeapDayPolicy::RollForward => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::ClampToMonthEnd => NaiveDate::from_ymd_opt(year, 2, 28),
        },
    }
}

/// every anniversary of `from` that falls on or before `to`, in order
pub fn anniversaries(from: NaiveDate, to: NaiveDate, policy: LeapDayPolicy) -> Vec<NaiveDate> {
    if from > to {
        return Vec::new();
    }

    let max_years = (to.year() - from.year()) as u32;
    let mut dates = Vec::with_capacity(max_years as usize);

    for offset in 1..=max_years {
        match anniversary_of(from, offset, policy) {
            Some(date) if date <= to => dates.push(date),
            _ => break,
        }
    }

    dates
}
