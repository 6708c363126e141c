use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::models::zoom::{DataBounds, ViewState, ZoomLevel};
use crate::services::calendar;
use crate::services::range::period_start;

impl ZoomLevel {
    /// Months moved by one page at this zoom level. `All` never pages.
    pub fn page_months(self) -> i32 {
        match self {
            ZoomLevel::All => 0,
            ZoomLevel::Year => 12,
            ZoomLevel::Quarter => 3,
            ZoomLevel::Month => 1,
        }
    }
}

/// Paging through history at a fixed zoom level.
///
/// Holds a copy of the caller's view; paging returns the next view rather
/// than mutating anything. Paging never changes the zoom level, and paging
/// past either end of the data is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    bounds: DataBounds,
    view: ViewState,
}

impl Navigator {
    /// The reference date is clamped into `bounds` on construction.
    pub fn new(bounds: DataBounds, view: ViewState) -> Self {
        Self {
            bounds,
            view: view.clamped(bounds),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn can_page_forward(&self) -> bool {
        let ViewState {
            zoom_level,
            reference_date,
        } = self.view;
        match zoom_level {
            ZoomLevel::All => false,
            ZoomLevel::Year => reference_date.year() < self.bounds.max.year(),
            ZoomLevel::Quarter | ZoomLevel::Month => {
                let candidate = self.candidate(1);
                let last_start = period_start(self.bounds, zoom_level, self.bounds.max);
                period_start(self.bounds, zoom_level, candidate) <= last_start
            }
        }
    }

    pub fn can_page_backward(&self) -> bool {
        let ViewState {
            zoom_level,
            reference_date,
        } = self.view;
        match zoom_level {
            ZoomLevel::All => false,
            ZoomLevel::Year => reference_date.year() > self.bounds.min.year(),
            ZoomLevel::Quarter | ZoomLevel::Month => {
                let candidate = self.candidate(-1);
                let first_start = period_start(self.bounds, zoom_level, self.bounds.min);
                period_start(self.bounds, zoom_level, candidate) >= first_start
            }
        }
    }

    /// View one unit later, or the current view when already at the end.
    pub fn page_forward(&self) -> ViewState {
        if !self.can_page_forward() {
            return self.view;
        }
        self.step(1)
    }

    /// View one unit earlier, or the current view when already at the start.
    pub fn page_backward(&self) -> ViewState {
        if !self.can_page_backward() {
            return self.view;
        }
        self.step(-1)
    }

    /// Reference date one page in `direction`, normalized to the 1st of
    /// its month but not yet clamped.
    fn candidate(&self, direction: i32) -> NaiveDate {
        let from = calendar::start_of_month(self.view.reference_date);
        calendar::add_months(from, direction * self.view.zoom_level.page_months())
    }

    fn step(&self, direction: i32) -> ViewState {
        let reference_date = self.bounds.clamp(self.candidate(direction));
        trace!(
            zoom = %self.view.zoom_level,
            from = %self.view.reference_date,
            to = %reference_date,
            "page"
        );
        ViewState::new(self.view.zoom_level, reference_date)
    }
}
