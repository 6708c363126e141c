use crate::models::observation::PriceObservation;
use crate::models::summary::PriceSummary;
use crate::models::zoom::DateRange;

/// Computes summary statistics over a product's price history.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize all observations, or only those inside `range` when given.
    ///
    /// Expects `observations` sorted ascending by date. Returns `None` when
    /// no observation qualifies.
    pub fn summarize(
        &self,
        observations: &[PriceObservation],
        range: Option<DateRange>,
    ) -> Option<PriceSummary> {
        let mut selected = observations
            .iter()
            .filter(|o| range.map_or(true, |r| r.contains(o.date)));

        let first = selected.next()?;
        let mut summary = PriceSummary {
            observation_count: 1,
            first_date: first.date,
            last_date: first.date,
            latest_price: first.price,
            lowest_price: first.price,
            lowest_price_date: first.date,
            highest_price: first.price,
            highest_price_date: first.date,
            average_price: 0.0,
            sale_count: 0,
            sale_average_price: None,
            regular_average_price: None,
        };
        let mut total = first.price;
        let mut sale_total = 0.0;
        let mut regular_total = 0.0;
        if first.is_sale {
            summary.sale_count = 1;
            sale_total = first.price;
        } else {
            regular_total = first.price;
        }

        for observation in selected {
            summary.observation_count += 1;
            summary.last_date = observation.date;
            summary.latest_price = observation.price;
            total += observation.price;

            // Strict comparisons keep the earliest date on ties.
            if observation.price < summary.lowest_price {
                summary.lowest_price = observation.price;
                summary.lowest_price_date = observation.date;
            }
            if observation.price > summary.highest_price {
                summary.highest_price = observation.price;
                summary.highest_price_date = observation.date;
            }

            if observation.is_sale {
                summary.sale_count += 1;
                sale_total += observation.price;
            } else {
                regular_total += observation.price;
            }
        }

        let regular_count = summary.observation_count - summary.sale_count;
        summary.average_price = total / summary.observation_count as f64;
        summary.sale_average_price =
            (summary.sale_count > 0).then(|| sale_total / summary.sale_count as f64);
        summary.regular_average_price =
            (regular_count > 0).then(|| regular_total / regular_count as f64);

        Some(summary)
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
