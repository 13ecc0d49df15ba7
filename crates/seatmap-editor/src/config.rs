//! Editor configuration.

use seatmap_core::{CameraLimits, DEFAULT_PADDING, Result, SeatMapError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Nominal canvas size, used by generators and for an empty scene.
    pub width: f64,
    pub height: f64,
    /// Padding around content when framing the viewport.
    pub padding: f64,
    /// Screen pixels the pointer must travel (along either axis) before a
    /// press becomes a drag.
    pub drag_threshold: f64,
    /// Smallest width/height a resize can produce, in document units.
    pub min_object_size: f64,
    /// Price given to generated seats when the catalog is empty.
    pub fallback_price: f64,
    /// Maximum history length, `None` for unbounded.
    pub history_limit: Option<usize>,
    pub camera: CameraLimits,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: DEFAULT_PADDING,
            drag_threshold: 5.0,
            min_object_size: 30.0,
            fallback_price: 20.0,
            history_limit: None,
            camera: CameraLimits::default(),
        }
    }
}

impl EditorConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SeatMapError::Config)
    }
}
