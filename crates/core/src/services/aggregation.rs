use chrono::NaiveDate;

use crate::models::chart::BucketStats;
use crate::models::observation::PriceObservation;
use crate::models::zoom::{DateRange, Granularity};
use crate::services::calendar;

/// Running sums for one bucket. Averages are only derived in `finish`,
/// after every observation has been folded in.
#[derive(Debug, Clone, Copy, Default)]
struct BucketTotals {
    count: usize,
    price_sum: f64,
    sale_count: usize,
    sale_sum: f64,
    regular_sum: f64,
}

impl BucketTotals {
    fn add(&mut self, observation: &PriceObservation) {
        self.count += 1;
        self.price_sum += observation.price;
        if observation.is_sale {
            self.sale_count += 1;
            self.sale_sum += observation.price;
        } else {
            self.regular_sum += observation.price;
        }
    }

    fn finish(self, bucket_start: NaiveDate, bucket_end: Option<NaiveDate>) -> BucketStats {
        let regular_count = self.count - self.sale_count;
        BucketStats {
            total_count: self.count,
            average_price: mean(self.price_sum, self.count),
            sale_count: self.sale_count,
            sale_average_price: mean(self.sale_sum, self.sale_count),
            regular_count,
            regular_average_price: mean(self.regular_sum, regular_count),
            bucket_start,
            bucket_end,
        }
    }
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Reduces raw observations into per-bucket statistics.
///
/// Buckets are addressed by their index in the generated interval sequence,
/// so the fold keeps a flat array of totals instead of a keyed map.
pub struct BucketAggregator<'a> {
    intervals: &'a [NaiveDate],
    granularity: Granularity,
    window: DateRange,
}

impl<'a> BucketAggregator<'a> {
    /// `intervals` must be the sorted output of `generate_intervals` for
    /// `granularity`. Observations outside `window` are ignored.
    pub fn new(intervals: &'a [NaiveDate], granularity: Granularity, window: DateRange) -> Self {
        Self {
            intervals,
            granularity,
            window,
        }
    }

    /// Index of the bucket holding `date`, if it is one of the intervals.
    pub fn bucket_index(&self, date: NaiveDate) -> Option<usize> {
        if !self.window.contains(date) {
            return None;
        }
        self.intervals
            .binary_search(&self.granularity.bucket_start(date))
            .ok()
    }

    /// Fold `observations` into one entry per interval, in interval order.
    /// Intervals no observation fell into stay `None`.
    ///
    /// Observations are folded in a canonical order (bucket, then price), so
    /// the floating-point sums do not depend on the order of the input.
    pub fn aggregate(&self, observations: &[PriceObservation]) -> Vec<Option<BucketStats>> {
        let mut indexed: Vec<(usize, &PriceObservation)> = observations
            .iter()
            .filter_map(|o| self.bucket_index(o.date).map(|idx| (idx, o)))
            .collect();
        indexed.sort_by(|(a_idx, a), (b_idx, b)| {
            a_idx
                .cmp(b_idx)
                .then(a.price.total_cmp(&b.price))
                .then(a.is_sale.cmp(&b.is_sale))
        });

        let mut totals = vec![BucketTotals::default(); self.intervals.len()];
        for (idx, observation) in indexed {
            totals[idx].add(observation);
        }

        totals
            .into_iter()
            .zip(self.intervals)
            .map(|(bucket, &start)| {
                (bucket.count > 0).then(|| {
                    let (start, end) = self.display_bounds(start);
                    bucket.finish(start, end)
                })
            })
            .collect()
    }

    /// Week buckets report their own start/end, clipped to the window.
    fn display_bounds(&self, start: NaiveDate) -> (NaiveDate, Option<NaiveDate>) {
        match self.granularity {
            Granularity::Week => (
                start.max(self.window.start),
                Some(calendar::end_of_week(start).min(self.window.end)),
            ),
            Granularity::Month | Granularity::Day => (start, None),
        }
    }
}
