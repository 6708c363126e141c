use chrono::NaiveDate;
use tracing::debug;

use crate::models::zoom::{DataBounds, ZoomLevel};
use crate::services::range::{compute_range, period_start};

/// Translate the reference date when the zoom level changes, so the new
/// window stays coherent with what was on screen.
///
/// - to `All`: the reference date is kept (only clamped).
/// - from `All`: jump to the period containing `max_date`.
/// - wide to narrow: open on the last sub-period of the old window, i.e.
///   the period containing the old range's end.
/// - narrow to wide: snap to the start of the enclosing period.
///
/// The result always lies within `[min_date, max_date]`.
pub fn map_reference_date_on_zoom_change(
    old_zoom: ZoomLevel,
    new_zoom: ZoomLevel,
    reference_date: NaiveDate,
    min_date: NaiveDate,
    max_date: NaiveDate,
) -> NaiveDate {
    let bounds = DataBounds::new(min_date, max_date);
    let reference = bounds.clamp(reference_date);

    let mapped = if old_zoom == new_zoom || new_zoom == ZoomLevel::All {
        reference
    } else if old_zoom == ZoomLevel::All {
        period_start(bounds, new_zoom, bounds.max)
    } else if new_zoom.is_narrower_than(old_zoom) {
        // compute_range already clamps the end to max_date.
        let visible_end = compute_range(bounds, old_zoom, reference).end;
        period_start(bounds, new_zoom, visible_end)
    } else {
        period_start(bounds, new_zoom, reference)
    };

    let mapped = bounds.clamp(mapped);
    debug!(
        from_zoom = %old_zoom,
        to_zoom = %new_zoom,
        from = %reference_date,
        to = %mapped,
        "zoom transition"
    );
    mapped
}
