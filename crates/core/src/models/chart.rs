use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::zoom::{DateRange, ViewState};

/// Aggregated statistics for one bucket of observations.
///
/// Only built for buckets that hold at least one observation; empty buckets
/// are represented by a `ChartPoint` whose `stats` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Number of observations in the bucket
    pub total_count: usize,

    /// Mean of all prices, `None` when `total_count` is zero
    pub average_price: Option<f64>,

    pub sale_count: usize,

    /// Mean of sale prices, `None` when there were no sale observations
    pub sale_average_price: Option<f64>,

    pub regular_count: usize,

    /// Mean of regular prices, `None` when there were no regular observations
    pub regular_average_price: Option<f64>,

    /// First day of the bucket; week buckets are clipped to the visible window
    pub bucket_start: NaiveDate,

    /// Last day covered by the bucket; only set for week buckets
    pub bucket_end: Option<NaiveDate>,
}

/// A single data point for price chart rendering.
///
/// The core computes all the numbers; the frontend only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Axis label to draw under this point, `None` when hidden
    pub axis_label: Option<String>,

    /// Start date of the bucket this point represents
    pub bucket_start: NaiveDate,

    /// Bucket statistics, `None` when no observation fell in the bucket
    pub stats: Option<BucketStats>,
}

/// Everything the renderer needs for one chart frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// The view the chart was computed for, reference date already clamped
    pub view: ViewState,

    /// Visible window, `None` when there are no observations
    pub range: Option<DateRange>,

    /// Ordered buckets spanning the visible window, gaps included
    pub points: Vec<ChartPoint>,

    pub can_page_forward: bool,

    pub can_page_backward: bool,
}

impl ChartView {
    /// An empty chart: no points and paging disabled.
    pub fn empty(view: ViewState) -> Self {
        Self {
            view,
            range: None,
            points: Vec::new(),
            can_page_forward: false,
            can_page_backward: false,
        }
    }

    /// Number of buckets that carry statistics.
    pub fn populated_points(&self) -> usize {
        self.points.iter().filter(|p| p.stats.is_some()).count()
    }
}
