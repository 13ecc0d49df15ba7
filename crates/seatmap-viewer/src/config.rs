//! Viewer configuration.

use seatmap_core::{CameraLimits, DEFAULT_PADDING, Result, SeatMapError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub padding: f64,
    /// Paint a stage banner above the content.
    pub show_stage: bool,
    /// Extra room added above the viewport for the banner.
    pub stage_offset: f64,
    pub stage_title: String,
    pub camera: CameraLimits,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            show_stage: true,
            stage_offset: 80.0,
            stage_title: "ESCENARIO".to_string(),
            camera: CameraLimits {
                min_scale: 0.3,
                max_scale: 5.0,
                zoom_step: 0.3,
                wheel_step: 0.05,
            },
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SeatMapError::Config)
    }
}
