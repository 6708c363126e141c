use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::zoom::{DataBounds, DateRange};

/// A single recorded price for a tracked product (date → price, sale flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Calendar day of the observation (no time component)
    pub date: NaiveDate,

    /// Observed price in the product's currency
    pub price: f64,

    /// Whether the price was a sale price
    #[serde(default)]
    pub is_sale: bool,
}

impl PriceObservation {
    pub fn new(date: NaiveDate, price: f64, is_sale: bool) -> Self {
        Self {
            date,
            price,
            is_sale,
        }
    }

    pub fn sale(date: NaiveDate, price: f64) -> Self {
        Self::new(date, price, true)
    }

    pub fn regular(date: NaiveDate, price: f64) -> Self {
        Self::new(date, price, false)
    }

    /// Build an observation from a timestamp, keeping only its calendar day.
    ///
    /// This is the single place where a time-of-day is discarded; everything
    /// downstream works on whole days.
    pub fn from_datetime(at: NaiveDateTime, price: f64, is_sale: bool) -> Self {
        Self::new(at.date(), price, is_sale)
    }
}

/// The observation list of one product, kept sorted ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PriceObservation>", into = "Vec<PriceObservation>")]
pub struct ObservationSeries {
    points: Vec<PriceObservation>,
}

impl ObservationSeries {
    /// Wrap an observation list. A stable sort keeps same-day observations
    /// in the order they were supplied.
    pub fn new(mut points: Vec<PriceObservation>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Parse a JSON array of observations, rejecting unusable prices.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let points: Vec<PriceObservation> = serde_json::from_str(json)?;
        if let Some(bad) = points.iter().find(|p| !p.price.is_finite() || p.price < 0.0) {
            return Err(CoreError::ValidationError(format!(
                "price {} on {} must be a finite, non-negative number",
                bad.price, bad.date
            )));
        }
        Ok(Self::new(points))
    }

    /// Export the observations as a JSON array.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.points)?)
    }

    pub fn as_slice(&self) -> &[PriceObservation] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<&PriceObservation> {
        self.points.last()
    }

    /// Earliest and latest observation dates. `None` for an empty series.
    pub fn bounds(&self) -> Option<DataBounds> {
        DataBounds::from_observations(&self.points)
    }

    /// All observations whose date falls inside `range` (inclusive).
    /// Uses binary search to find both boundaries.
    pub fn in_range(&self, range: DateRange) -> &[PriceObservation] {
        let start = self.points.partition_point(|p| p.date < range.start);
        let end = self.points.partition_point(|p| p.date <= range.end);
        if start >= end {
            return &[];
        }
        &self.points[start..end]
    }
}

impl From<Vec<PriceObservation>> for ObservationSeries {
    fn from(points: Vec<PriceObservation>) -> Self {
        Self::new(points)
    }
}

impl From<ObservationSeries> for Vec<PriceObservation> {
    fn from(series: ObservationSeries) -> Self {
        series.points
    }
}
