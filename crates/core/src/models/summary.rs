use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary of a product's price history, over all observations or one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Number of observations summarized
    pub observation_count: usize,

    /// Date of the earliest observation
    pub first_date: NaiveDate,

    /// Date of the most recent observation
    pub last_date: NaiveDate,

    /// Price of the most recent observation
    pub latest_price: f64,

    /// Lowest observed price and the earliest date it was seen
    pub lowest_price: f64,
    pub lowest_price_date: NaiveDate,

    /// Highest observed price and the earliest date it was seen
    pub highest_price: f64,
    pub highest_price_date: NaiveDate,

    /// Mean of all prices
    pub average_price: f64,

    /// Number of sale observations
    pub sale_count: usize,

    /// Mean of sale prices, `None` without sale observations
    pub sale_average_price: Option<f64>,

    /// Mean of regular prices, `None` without regular observations
    pub regular_average_price: Option<f64>,
}
