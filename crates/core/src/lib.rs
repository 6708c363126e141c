pub mod errors;
pub mod models;
pub mod services;
pub mod telemetry;

use chrono::NaiveDate;
use models::{
    chart::ChartView,
    observation::{ObservationSeries, PriceObservation},
    settings::ChartSettings,
    summary::PriceSummary,
    zoom::{DataBounds, ViewState, ZoomLevel},
};
use services::{
    chart_service::ChartService, navigation::Navigator, range::compute_range,
    summary_service::SummaryService, zoom_transition::map_reference_date_on_zoom_change,
};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the price history chart core.
/// Holds one product's observations, the chart settings and the current view.
#[must_use]
pub struct PriceHistoryChart {
    series: ObservationSeries,
    settings: ChartSettings,
    view: ViewState,
    chart_service: ChartService,
    summary_service: SummaryService,
}

impl std::fmt::Debug for PriceHistoryChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceHistoryChart")
            .field("observations", &self.series.len())
            .field("settings", &self.settings)
            .field("view", &self.view)
            .finish()
    }
}

impl PriceHistoryChart {
    /// Create a chart over `observations` with default settings.
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self::with_settings(observations, ChartSettings::default())
    }

    /// Create a chart over `observations`, opening where `settings` say.
    pub fn with_settings(observations: Vec<PriceObservation>, settings: ChartSettings) -> Self {
        let series = ObservationSeries::new(observations);
        let reference_date = match series.bounds() {
            Some(bounds) if settings.open_on_latest => bounds.max,
            Some(bounds) => bounds.min,
            // Nothing to show; any date will do until observations arrive.
            None => NaiveDate::default(),
        };
        let view = ViewState::new(settings.default_zoom_level, reference_date);
        debug!(observations = series.len(), zoom = %view.zoom_level, "chart created");

        Self {
            series,
            settings,
            view,
            chart_service: ChartService::new(),
            summary_service: SummaryService::new(),
        }
    }

    /// Load observations from a JSON array (see `ObservationSeries::from_json`).
    pub fn from_json(json: &str, settings: ChartSettings) -> Result<Self, CoreError> {
        let series = ObservationSeries::from_json(json)?;
        Ok(Self::with_settings(series.into(), settings))
    }

    /// Export the observations as a JSON array.
    pub fn to_json(&self) -> Result<String, CoreError> {
        self.series.to_json()
    }

    // ── State ───────────────────────────────────────────────────────

    #[must_use]
    pub fn observations(&self) -> &[PriceObservation] {
        self.series.as_slice()
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Earliest and latest observation dates, `None` without observations.
    #[must_use]
    pub fn bounds(&self) -> Option<DataBounds> {
        self.series.bounds()
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.view.zoom_level
    }

    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.view.reference_date
    }

    // ── Zoom & Navigation ───────────────────────────────────────────

    /// Switch zoom level, translating the reference date so the new window
    /// stays coherent with the old one.
    pub fn set_zoom_level(&mut self, zoom_level: ZoomLevel) {
        if let Some(bounds) = self.bounds() {
            self.view.reference_date = map_reference_date_on_zoom_change(
                self.view.zoom_level,
                zoom_level,
                self.view.reference_date,
                bounds.min,
                bounds.max,
            );
        }
        self.view.zoom_level = zoom_level;
    }

    /// Center the view on `date`, clamped into the data bounds.
    pub fn set_reference_date(&mut self, date: NaiveDate) {
        self.view.reference_date = match self.bounds() {
            Some(bounds) => bounds.clamp(date),
            None => date,
        };
    }

    #[must_use]
    pub fn can_page_forward(&self) -> bool {
        self.navigator().is_some_and(|n| n.can_page_forward())
    }

    #[must_use]
    pub fn can_page_backward(&self) -> bool {
        self.navigator().is_some_and(|n| n.can_page_backward())
    }

    /// Move one unit (year, quarter or month) later. No-op at the end.
    pub fn page_forward(&mut self) {
        if let Some(navigator) = self.navigator() {
            self.view = navigator.page_forward();
        }
    }

    /// Move one unit (year, quarter or month) earlier. No-op at the start.
    pub fn page_backward(&mut self) {
        if let Some(navigator) = self.navigator() {
            self.view = navigator.page_backward();
        }
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart data for the current view.
    #[must_use]
    pub fn chart_view(&self) -> ChartView {
        self.chart_service.compute(self.series.as_slice(), self.view)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Summary over the whole history.
    #[must_use]
    pub fn summary(&self) -> Option<PriceSummary> {
        self.summary_service.summarize(self.series.as_slice(), None)
    }

    /// Summary over the window currently on screen.
    #[must_use]
    pub fn visible_summary(&self) -> Option<PriceSummary> {
        let bounds = self.bounds()?;
        let range = compute_range(bounds, self.view.zoom_level, self.view.reference_date);
        self.summary_service
            .summarize(self.series.in_range(range), None)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn navigator(&self) -> Option<Navigator> {
        self.bounds().map(|bounds| Navigator::new(bounds, self.view))
    }
}
