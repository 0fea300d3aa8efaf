//! Camera Configuration
//!
//! Pitch limits and look-input handling for the camera heading tracker.

use serde::{Deserialize, Serialize};

/// Tunables for [`CameraHeading`](crate::camera::CameraHeading).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// How far in degrees the camera can look up
    pub top_clamp: f32,
    /// How far in degrees the camera can look down
    pub bottom_clamp: f32,
    /// Extra degrees added to the output pitch, for fine-tuning a locked camera
    pub angle_override: f32,
    /// Ignore look input entirely (clamp and output still run)
    pub lock_position: bool,
    /// Squared look magnitude below which input is treated as noise
    pub look_threshold: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            top_clamp: 70.0,
            bottom_clamp: -30.0,
            angle_override: 0.0,
            lock_position: false,
            look_threshold: 0.01,
        }
    }
}
