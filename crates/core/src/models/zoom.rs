use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::observation::PriceObservation;

/// The fixed zoom levels a price chart can be viewed at.
///
/// Variants are ordered from the widest window to the narrowest, so
/// `ZoomLevel::Year < ZoomLevel::Month` reads as "year is wider than month".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoomLevel {
    /// Full observation history
    All,
    /// One calendar year
    Year,
    /// One calendar quarter (Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec)
    Quarter,
    /// One calendar month
    Month,
}

impl ZoomLevel {
    /// Every zoom level, widest first.
    pub const ALL_LEVELS: [ZoomLevel; 4] = [
        ZoomLevel::All,
        ZoomLevel::Year,
        ZoomLevel::Quarter,
        ZoomLevel::Month,
    ];

    /// Bucket granularity used when charting this zoom level.
    pub fn granularity(self) -> Granularity {
        match self {
            ZoomLevel::All | ZoomLevel::Year => Granularity::Month,
            ZoomLevel::Quarter => Granularity::Week,
            ZoomLevel::Month => Granularity::Day,
        }
    }

    /// Whether `self` shows a shorter window than `other`.
    pub fn is_narrower_than(self, other: ZoomLevel) -> bool {
        self > other
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomLevel::All => write!(f, "All"),
            ZoomLevel::Year => write!(f, "Year"),
            ZoomLevel::Quarter => write!(f, "Quarter"),
            ZoomLevel::Month => write!(f, "Month"),
        }
    }
}

/// Size of one aggregation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Month,
    /// Sunday-aligned week
    Week,
    Day,
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Clamp `date` into the range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    /// Overlap of two ranges, `None` when they are disjoint.
    pub fn intersect(&self, other: DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(DateRange { start, end })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Earliest and latest observation dates of a product's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DataBounds {
    /// Bounds of `min..=max`. Arguments given in the wrong order are swapped.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Bounds of an observation list. `None` when the list is empty.
    pub fn from_observations(observations: &[PriceObservation]) -> Option<Self> {
        let min = observations.iter().map(|o| o.date).min()?;
        let max = observations.iter().map(|o| o.date).max()?;
        Some(Self { min, max })
    }

    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.min, self.max)
    }

    /// Clamp `date` into `[min, max]`.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }
}

/// What the user is currently looking at: a zoom level and a reference date.
///
/// Callers hold this value and pass it to the chart functions, which return
/// an updated copy; nothing in the library keeps it as hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom_level: ZoomLevel,
    pub reference_date: NaiveDate,
}

impl ViewState {
    pub fn new(zoom_level: ZoomLevel, reference_date: NaiveDate) -> Self {
        Self {
            zoom_level,
            reference_date,
        }
    }

    /// Same zoom level with the reference date clamped into `bounds`.
    pub fn clamped(self, bounds: DataBounds) -> Self {
        Self {
            zoom_level: self.zoom_level,
            reference_date: bounds.clamp(self.reference_date),
        }
    }
}
