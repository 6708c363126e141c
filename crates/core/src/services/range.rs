use chrono::NaiveDate;

use crate::models::zoom::{DataBounds, DateRange, ZoomLevel};
use crate::services::calendar;

/// Full calendar window of `zoom_level` around `reference`, before any
/// clamping to the data. `All` has no calendar window of its own and
/// returns the data bounds.
pub fn zoom_window(bounds: DataBounds, zoom_level: ZoomLevel, reference: NaiveDate) -> DateRange {
    match zoom_level {
        ZoomLevel::All => bounds.as_range(),
        ZoomLevel::Year => DateRange::new(
            calendar::start_of_year(reference),
            calendar::end_of_year(reference),
        ),
        ZoomLevel::Quarter => DateRange::new(
            calendar::start_of_quarter(reference),
            calendar::end_of_quarter(reference),
        ),
        ZoomLevel::Month => DateRange::new(
            calendar::start_of_month(reference),
            calendar::end_of_month(reference),
        ),
    }
}

/// Start of the zoom-level period containing `date`. For `All` the whole
/// history is one period starting at `bounds.min`.
pub fn period_start(bounds: DataBounds, zoom_level: ZoomLevel, date: NaiveDate) -> NaiveDate {
    zoom_window(bounds, zoom_level, date).start
}

/// Visible window for `zoom_level` around `reference`.
///
/// The reference date is clamped into the data bounds first, then the
/// calendar window containing it is intersected with the bounds, so both
/// ends of the result always lie within `[bounds.min, bounds.max]`.
pub fn compute_range(bounds: DataBounds, zoom_level: ZoomLevel, reference: NaiveDate) -> DateRange {
    let reference = bounds.clamp(reference);
    let window = zoom_window(bounds, zoom_level, reference);
    // The clamped reference lies in both ranges, so they always overlap.
    window.intersect(bounds.as_range()).unwrap_or(window)
}
