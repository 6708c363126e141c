// ═══════════════════════════════════════════════════════════════════
// Facade Tests — PriceHistoryChart zooming, paging and summaries
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use price_history_core::errors::CoreError;
use price_history_core::models::observation::PriceObservation;
use price_history_core::models::settings::ChartSettings;
use price_history_core::models::zoom::{DataBounds, DateRange, ZoomLevel};
use price_history_core::PriceHistoryChart;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Two and a half years of monthly observations, every third one on sale.
fn history() -> Vec<PriceObservation> {
    let mut obs = Vec::new();
    let mut date = d(2022, 1, 1);
    let mut i = 0;
    while date <= d(2024, 6, 15) {
        obs.push(PriceObservation::new(date, 4.0 + (i % 5) as f64 * 0.25, i % 3 == 0));
        date = date.checked_add_months(chrono::Months::new(1)).unwrap();
        i += 1;
    }
    obs.push(PriceObservation::regular(d(2024, 6, 15), 4.5));
    obs
}

mod construction {
    use super::*;

    #[test]
    fn opens_on_latest_at_default_zoom() {
        let chart = PriceHistoryChart::new(history());
        assert_eq!(chart.zoom_level(), ZoomLevel::All);
        assert_eq!(chart.reference_date(), d(2024, 6, 15));
        assert_eq!(chart.bounds(), Some(DataBounds::new(d(2022, 1, 1), d(2024, 6, 15))));
    }

    #[test]
    fn settings_choose_zoom_and_start() {
        let settings = ChartSettings {
            default_zoom_level: ZoomLevel::Year,
            open_on_latest: false,
        };
        let chart = PriceHistoryChart::with_settings(history(), settings);
        assert_eq!(chart.zoom_level(), ZoomLevel::Year);
        assert_eq!(chart.reference_date(), d(2022, 1, 1));
        assert!(!chart.can_page_backward());
        assert!(chart.can_page_forward());
    }

    #[test]
    fn debug_output_is_compact() {
        let chart = PriceHistoryChart::new(history());
        let out = format!("{chart:?}");
        assert!(out.contains("PriceHistoryChart"));
        assert!(out.contains("observations"));
    }
}

mod zoom_and_paging {
    use super::*;

    #[test]
    fn quarter_then_month_opens_last_month_of_quarter() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_zoom_level(ZoomLevel::Quarter);
        chart.set_reference_date(d(2024, 2, 10));
        assert_eq!(
            chart.chart_view().range,
            Some(DateRange::new(d(2024, 1, 1), d(2024, 3, 31)))
        );

        chart.set_zoom_level(ZoomLevel::Month);
        assert_eq!(
            chart.chart_view().range,
            Some(DateRange::new(d(2024, 3, 1), d(2024, 3, 31)))
        );
    }

    #[test]
    fn year_paging_stops_at_both_ends() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_zoom_level(ZoomLevel::Year);
        assert_eq!(chart.reference_date(), d(2024, 1, 1));
        assert!(!chart.can_page_forward());
        assert!(chart.can_page_backward());

        chart.page_forward();
        assert_eq!(chart.reference_date(), d(2024, 1, 1));

        chart.page_backward();
        chart.page_backward();
        assert_eq!(chart.reference_date(), d(2022, 1, 1));
        assert!(!chart.can_page_backward());
        chart.page_backward();
        assert_eq!(chart.reference_date(), d(2022, 1, 1));
        assert_eq!(chart.zoom_level(), ZoomLevel::Year);
    }

    #[test]
    fn month_paging_walks_every_month() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_zoom_level(ZoomLevel::Month);
        let mut pages = 1;
        while chart.can_page_backward() {
            chart.page_backward();
            pages += 1;
        }
        // Jan 2022 through Jun 2024
        assert_eq!(pages, 30);
        assert_eq!(chart.reference_date(), d(2022, 1, 1));
    }

    #[test]
    fn reference_date_is_clamped() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_reference_date(d(1990, 1, 1));
        assert_eq!(chart.reference_date(), d(2022, 1, 1));
    }

    #[test]
    fn back_to_all_shows_full_history() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_zoom_level(ZoomLevel::Month);
        chart.page_backward();
        chart.set_zoom_level(ZoomLevel::All);
        let view = chart.chart_view();
        assert_eq!(view.range, Some(DateRange::new(d(2022, 1, 1), d(2024, 6, 15))));
        assert_eq!(view.points.len(), 30);
        assert_eq!(view.populated_points(), 30);
    }
}

mod empty_history {
    use super::*;

    #[test]
    fn empty_chart_never_pages() {
        let mut chart = PriceHistoryChart::new(Vec::new());
        assert!(chart.bounds().is_none());
        assert!(!chart.can_page_forward());
        assert!(!chart.can_page_backward());
        chart.page_forward();
        chart.set_zoom_level(ZoomLevel::Month);
        assert_eq!(chart.zoom_level(), ZoomLevel::Month);

        let view = chart.chart_view();
        assert!(view.points.is_empty());
        assert!(view.range.is_none());
        assert!(chart.summary().is_none());
        assert!(chart.visible_summary().is_none());
    }
}

mod summaries {
    use super::*;

    #[test]
    fn visible_summary_covers_current_window() {
        let mut chart = PriceHistoryChart::new(history());
        chart.set_zoom_level(ZoomLevel::Year);
        let visible = chart.visible_summary().unwrap();
        // Jan..Jun 2024 monthly points plus the Jun 15 one
        assert_eq!(visible.observation_count, 7);
        assert_eq!(visible.first_date, d(2024, 1, 1));

        let all = chart.summary().unwrap();
        assert_eq!(all.observation_count, 31);
        assert_eq!(all.last_date, d(2024, 6, 15));
    }
}

mod json {
    use super::*;

    #[test]
    fn loads_and_exports_observations() {
        let json = r#"[
            {"date":"2024-09-14","price":4.0,"is_sale":false},
            {"date":"2024-01-15","price":4.27,"is_sale":true}
        ]"#;
        let chart = PriceHistoryChart::from_json(json, ChartSettings::default()).unwrap();
        assert_eq!(chart.observations().len(), 2);
        assert_eq!(chart.observations()[0].date, d(2024, 1, 15));

        let again =
            PriceHistoryChart::from_json(&chart.to_json().unwrap(), ChartSettings::default())
                .unwrap();
        assert_eq!(again.observations(), chart.observations());
    }

    #[test]
    fn rejects_negative_price() {
        let json = r#"[{"date":"2024-01-15","price":-1.0,"is_sale":true}]"#;
        let err = PriceHistoryChart::from_json(json, ChartSettings::default()).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(err.to_string().contains("2024-01-15"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PriceHistoryChart::from_json("[{", ChartSettings::default()).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
