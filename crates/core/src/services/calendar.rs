//! Calendar-day boundary helpers.
//!
//! Everything here works on `NaiveDate`: no time-of-day and no timezone, so
//! repeated calls never drift. Month indices are 0-based (`0..=11`).

use chrono::{Datelike, Days, Months, NaiveDate};

/// Most recent Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// Saturday following `start_of_week(date)`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let start = start_of_week(date);
    start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// First month (0-based) of the calendar quarter containing `month0`.
pub fn quarter_start_month(month0: u32) -> u32 {
    (month0 / 3) * 3
}

/// Last month (0-based) of the calendar quarter containing `month0`.
pub fn quarter_end_month(month0: u32) -> u32 {
    quarter_start_month(month0) + 2
}

/// First day of the calendar quarter containing `date`.
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), quarter_start_month(date.month0()) + 1, 1)
        .unwrap_or(date)
}

/// Last day of the calendar quarter containing `date`.
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), quarter_end_month(date.month0()) + 1, 1)
        .map(end_of_month)
        .unwrap_or(date)
}

/// January 1st of `date`'s year.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// December 31st of `date`'s year.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// Shift `date` by a signed number of whole months.
///
/// The day is kept where possible and otherwise clipped to the end of the
/// target month (Jan 31 + 1 month = Feb 28/29). Saturates at the ends of
/// the representable calendar.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(if months >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Number of whole calendar months from `from`'s month to `to`'s month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month0() as i32 - from.month0() as i32
}
