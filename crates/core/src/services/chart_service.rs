use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::chart::{BucketStats, ChartPoint, ChartView};
use crate::models::observation::PriceObservation;
use crate::models::zoom::{DataBounds, DateRange, ViewState, ZoomLevel};
use crate::services::aggregation::BucketAggregator;
use crate::services::intervals::generate_intervals;
use crate::services::navigation::Navigator;
use crate::services::range::compute_range;

/// Generates chart-ready data sets from a product's price observations.
///
/// The core computes all the numbers; the frontend only renders.
/// Every call is a full, deterministic recomputation from the observation
/// list and the caller's view, so results can be memoized on those inputs.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the chart for `zoom_level` around `reference_date`.
    pub fn compute_chart_view(
        &self,
        observations: &[PriceObservation],
        zoom_level: ZoomLevel,
        reference_date: NaiveDate,
    ) -> ChartView {
        self.compute(observations, ViewState::new(zoom_level, reference_date))
    }

    /// Compute the chart for `view`.
    ///
    /// 1. Clamp the reference date into the data bounds
    /// 2. Work out the visible range for the zoom level
    /// 3. Generate every bucket start in that range, empty ones included
    /// 4. Aggregate the observations into those buckets
    /// 5. Label the buckets and decide whether paging is possible
    ///
    /// An empty observation list yields an empty chart with paging disabled.
    pub fn compute(&self, observations: &[PriceObservation], view: ViewState) -> ChartView {
        let Some(bounds) = DataBounds::from_observations(observations) else {
            debug!(zoom = %view.zoom_level, "no observations, empty chart");
            return ChartView::empty(view);
        };

        let navigator = Navigator::new(bounds, view);
        let view = navigator.view();
        let range = compute_range(bounds, view.zoom_level, view.reference_date);
        let granularity = view.zoom_level.granularity();

        let intervals = generate_intervals(range, granularity);
        let stats = BucketAggregator::new(&intervals, granularity, range).aggregate(observations);
        let points = format_points(view.zoom_level, range, &intervals, stats);

        debug!(
            zoom = %view.zoom_level,
            reference = %view.reference_date,
            %range,
            buckets = points.len(),
            populated = points.iter().filter(|p| p.stats.is_some()).count(),
            "computed chart view"
        );

        ChartView {
            view,
            range: Some(range),
            points,
            can_page_forward: navigator.can_page_forward(),
            can_page_backward: navigator.can_page_backward(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// Zip bucket starts with their statistics and attach axis labels.
///
/// - `All`: the year, on the first bucket and on every January
/// - `Year`: the first letter of the month name, on every bucket
/// - `Quarter`: the abbreviated month name, on the first week of each month
/// - `Month`: the day of the month
pub fn format_points(
    zoom_level: ZoomLevel,
    range: DateRange,
    intervals: &[NaiveDate],
    stats: Vec<Option<BucketStats>>,
) -> Vec<ChartPoint> {
    let mut last_labelled_month: Option<(i32, u32)> = None;

    intervals
        .iter()
        .zip(stats)
        .enumerate()
        .map(|(idx, (&bucket_start, stats))| {
            let axis_label = match zoom_level {
                ZoomLevel::All => {
                    (idx == 0 || bucket_start.month() == 1).then(|| bucket_start.year().to_string())
                }
                ZoomLevel::Year => bucket_start
                    .format("%B")
                    .to_string()
                    .chars()
                    .next()
                    .map(String::from),
                ZoomLevel::Quarter => {
                    // A week starting before the range belongs to the range's first month.
                    let shown = bucket_start.max(range.start);
                    let month = (shown.year(), shown.month());
                    (last_labelled_month != Some(month)).then(|| {
                        last_labelled_month = Some(month);
                        shown.format("%b").to_string()
                    })
                }
                ZoomLevel::Month => Some(bucket_start.day().to_string()),
            };

            ChartPoint {
                axis_label,
                bucket_start,
                stats,
            }
        })
        .collect()
}
