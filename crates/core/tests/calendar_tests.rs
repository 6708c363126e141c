// ═══════════════════════════════════════════════════════════════════
// Calendar Tests — week/month/quarter/year boundaries, month shifting
// ═══════════════════════════════════════════════════════════════════

use chrono::{Datelike, NaiveDate, Weekday};
use price_history_core::services::calendar::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

mod weeks {
    use super::*;

    #[test]
    fn start_of_week_is_previous_sunday() {
        // 2024-02-10 is a Saturday
        assert_eq!(start_of_week(d(2024, 2, 10)), d(2024, 2, 4));
    }

    #[test]
    fn start_of_week_on_sunday_is_same_day() {
        assert_eq!(start_of_week(d(2024, 2, 4)), d(2024, 2, 4));
    }

    #[test]
    fn start_of_week_crosses_year_boundary() {
        // 2024-01-01 is a Monday
        assert_eq!(start_of_week(d(2024, 1, 1)), d(2023, 12, 31));
    }

    #[test]
    fn end_of_week_is_following_saturday() {
        assert_eq!(end_of_week(d(2024, 2, 4)), d(2024, 2, 10));
        assert_eq!(end_of_week(d(2024, 2, 10)), d(2024, 2, 10));
        assert_eq!(end_of_week(d(2023, 12, 31)), d(2024, 1, 6));
    }

    #[test]
    fn week_bounds_are_sunday_and_saturday_for_a_whole_year() {
        let mut day = d(2024, 1, 1);
        while day.year() == 2024 {
            assert_eq!(start_of_week(day).weekday(), Weekday::Sun);
            assert_eq!(end_of_week(day).weekday(), Weekday::Sat);
            assert!(start_of_week(day) <= day && day <= end_of_week(day));
            day = day.succ_opt().unwrap();
        }
    }
}

mod months {
    use super::*;

    #[test]
    fn end_of_month_regular() {
        assert_eq!(end_of_month(d(2024, 4, 10)), d(2024, 4, 30));
        assert_eq!(end_of_month(d(2024, 12, 1)), d(2024, 12, 31));
    }

    #[test]
    fn end_of_month_leap_february() {
        assert_eq!(end_of_month(d(2024, 2, 3)), d(2024, 2, 29));
        assert_eq!(end_of_month(d(2023, 2, 3)), d(2023, 2, 28));
    }

    #[test]
    fn start_of_month_is_first() {
        assert_eq!(start_of_month(d(2024, 7, 19)), d(2024, 7, 1));
    }

    #[test]
    fn add_months_forward_and_back() {
        assert_eq!(add_months(d(2024, 1, 1), 3), d(2024, 4, 1));
        assert_eq!(add_months(d(2024, 1, 1), -1), d(2023, 12, 1));
        assert_eq!(add_months(d(2024, 6, 1), 12), d(2025, 6, 1));
    }

    #[test]
    fn add_months_clips_day_to_month_end() {
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
    }

    #[test]
    fn months_between_spans_years() {
        assert_eq!(months_between(d(2022, 11, 30), d(2023, 2, 1)), 3);
        assert_eq!(months_between(d(2023, 2, 1), d(2022, 11, 30)), -3);
        assert_eq!(months_between(d(2023, 2, 1), d(2023, 2, 28)), 0);
    }
}

mod quarters {
    use super::*;

    #[test]
    fn quarter_start_month_maps_all_months() {
        let starts: Vec<u32> = (0..12).map(quarter_start_month).collect();
        assert_eq!(starts, vec![0, 0, 0, 3, 3, 3, 6, 6, 6, 9, 9, 9]);
    }

    #[test]
    fn quarter_end_month_maps_all_months() {
        let ends: Vec<u32> = (0..12).map(quarter_end_month).collect();
        assert_eq!(ends, vec![2, 2, 2, 5, 5, 5, 8, 8, 8, 11, 11, 11]);
    }

    #[test]
    fn quarter_bounds_are_calendar_aligned() {
        assert_eq!(start_of_quarter(d(2024, 2, 10)), d(2024, 1, 1));
        assert_eq!(end_of_quarter(d(2024, 2, 10)), d(2024, 3, 31));
        assert_eq!(start_of_quarter(d(2024, 6, 30)), d(2024, 4, 1));
        assert_eq!(end_of_quarter(d(2024, 5, 1)), d(2024, 6, 30));
        assert_eq!(start_of_quarter(d(2024, 8, 15)), d(2024, 7, 1));
        assert_eq!(end_of_quarter(d(2024, 11, 2)), d(2024, 12, 31));
    }

    #[test]
    fn year_bounds() {
        assert_eq!(start_of_year(d(2023, 8, 9)), d(2023, 1, 1));
        assert_eq!(end_of_year(d(2023, 8, 9)), d(2023, 12, 31));
    }
}
