pub mod aggregation;
pub mod calendar;
pub mod chart_service;
pub mod intervals;
pub mod navigation;
pub mod range;
pub mod summary_service;
pub mod zoom_transition;
