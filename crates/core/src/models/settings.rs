use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::zoom::ZoomLevel;

/// User-configurable chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Zoom level a freshly loaded chart opens at.
    pub default_zoom_level: ZoomLevel,

    /// Open on the most recent observation (`true`) or the earliest one.
    pub open_on_latest: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_zoom_level: ZoomLevel::All,
            open_on_latest: true,
        }
    }
}

impl ChartSettings {
    /// Load settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
