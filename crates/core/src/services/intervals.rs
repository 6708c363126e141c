use chrono::{Days, Months, NaiveDate};

use crate::models::zoom::{DateRange, Granularity};
use crate::services::calendar;

impl Granularity {
    /// Start date of the bucket that `date` belongs to (its bucket key).
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Month => calendar::start_of_month(date),
            Granularity::Week => calendar::start_of_week(date),
            Granularity::Day => date,
        }
    }

    /// Bucket key as a string: `YYYY-MM` for months, the ISO date of the
    /// week-start Sunday for weeks, and the date itself for days.
    pub fn bucket_key(self, date: NaiveDate) -> String {
        match self {
            Granularity::Month => date.format("%Y-%m").to_string(),
            Granularity::Week | Granularity::Day => self.bucket_start(date).to_string(),
        }
    }

    /// Start of the bucket following the one starting at `start`.
    fn step(self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Month => {
                calendar::start_of_month(start).checked_add_months(Months::new(1))
            }
            Granularity::Week => start.checked_add_days(Days::new(7)),
            Granularity::Day => start.succ_opt(),
        }
    }
}

/// Generate the ordered, gapless bucket starts covering `range`.
///
/// Buckets without observations are included so the chart shows real gaps
/// instead of a compressed axis:
/// - months run from the 1st of the range's first month through the month
///   containing `range.end`;
/// - weeks run from the Sunday on or before `range.start` until past `range.end`;
/// - days run from the 1st of the range's first month through the end of
///   that month.
pub fn generate_intervals(range: DateRange, granularity: Granularity) -> Vec<NaiveDate> {
    let (first, last) = match granularity {
        Granularity::Month | Granularity::Week => {
            (granularity.bucket_start(range.start), range.end)
        }
        Granularity::Day => (
            calendar::start_of_month(range.start),
            calendar::end_of_month(range.start).max(range.end),
        ),
    };

    let mut intervals = Vec::new();
    let mut current = first;
    while current <= last {
        intervals.push(current);
        current = match granularity.step(current) {
            Some(next) => next,
            None => break,
        };
    }
    intervals
}
