pub mod chart;
pub mod observation;
pub mod settings;
pub mod summary;
pub mod zoom;
