//! Locomotion Configuration
//!
//! Flat set of named tunables for the locomotion state machine, loadable from
//! JSON. Every field has a default, so a config file only needs the values it
//! overrides.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfarer_engine::config::LocomotionConfig;
//!
//! let config = LocomotionConfig::from_json_str(r#"{ "sprint_speed": 6.0 }"#)?;
//! assert_eq!(config.move_speed, 2.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::camera_config::CameraConfig;
use crate::error::ConfigError;

/// Wind ring boost: a timed positional push up and along the facing direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Upward displacement over the whole boost (meters)
    pub boost_height: f32,
    /// Forward displacement over the whole boost (meters)
    pub boost_speed: f32,
    /// Boost duration (seconds)
    pub duration: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            boost_height: 0.5,
            boost_speed: 5.0,
            duration: 1.0,
        }
    }
}

/// Tunables for the locomotion state machine.
///
/// Gravity values are signed (negative pulls down). All other distances,
/// speeds and durations must be non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walk speed in m/s
    pub move_speed: f32,
    /// Sprint speed in m/s
    pub sprint_speed: f32,
    /// Lateral input scaling while gliding
    pub glide_movement_speed: f32,
    /// Time for the character to turn toward the movement direction (seconds)
    pub rotation_smooth_time: f32,
    /// Acceleration and deceleration rate of the horizontal speed
    pub speed_change_rate: f32,

    /// Height reached by a regular jump (meters)
    pub jump_height: f32,
    /// Height reached by a jump pad launch (meters)
    pub jump_pad_height: f32,
    /// Gravity acceleration (m/s², negative is down)
    pub gravity: f32,
    /// Gravity acceleration while gliding (m/s², negative is down)
    pub glide_gravity: f32,
    /// Maximum downward speed (m/s)
    pub terminal_velocity: f32,
    /// Vertical velocity held while grounded, keeps the ground check engaged
    pub landing_velocity: f32,

    /// Jump cooldown countdown (seconds); tracked but never gates a jump
    pub jump_timeout: f32,
    /// Fall-state countdown (seconds); tracked but never gates a transition
    pub fall_timeout: f32,

    /// Vertical offset of the grounded sphere; the sphere sits at `position.y - offset`
    pub grounded_offset: f32,
    /// Radius of the grounded sphere
    pub grounded_radius: f32,
    /// Minimum free fall distance below the character required to start gliding
    pub glide_check_distance: f32,

    /// Reach of the forward climbable ray
    pub wall_grab_distance: f32,
    /// Height of the climbable ray origin above the character position
    pub wall_probe_height: f32,
    /// Reach of the downward ray that ends a downward climb
    pub wall_drop_distance: f32,
    /// Upward velocity imparted when the climbable surface runs out
    pub wall_release_velocity: f32,

    pub wind: WindConfig,
    pub camera: CameraConfig,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            sprint_speed: 5.335,
            glide_movement_speed: 2.0,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            jump_pad_height: 3.0,
            gravity: -15.0,
            glide_gravity: -5.0,
            terminal_velocity: 53.0,
            landing_velocity: -2.0,
            jump_timeout: 0.5,
            fall_timeout: 0.15,
            grounded_offset: -0.14,
            grounded_radius: 0.28,
            glide_check_distance: 1.5,
            wall_grab_distance: 0.4,
            wall_probe_height: 0.1,
            wall_drop_distance: 0.1,
            wall_release_velocity: 4.0,
            wind: WindConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl LocomotionConfig {
    /// Parse tunables from JSON text and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read tunables from a JSON file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the only constraints the controller relies on: finite values,
    /// non-negative distances/speeds/durations, and `bottom_clamp <= top_clamp`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("sprint_speed", self.sprint_speed),
            ("glide_movement_speed", self.glide_movement_speed),
            ("rotation_smooth_time", self.rotation_smooth_time),
            ("speed_change_rate", self.speed_change_rate),
            ("jump_height", self.jump_height),
            ("jump_pad_height", self.jump_pad_height),
            ("terminal_velocity", self.terminal_velocity),
            ("jump_timeout", self.jump_timeout),
            ("fall_timeout", self.fall_timeout),
            ("grounded_radius", self.grounded_radius),
            ("glide_check_distance", self.glide_check_distance),
            ("wall_grab_distance", self.wall_grab_distance),
            ("wall_probe_height", self.wall_probe_height),
            ("wall_drop_distance", self.wall_drop_distance),
            ("wall_release_velocity", self.wall_release_velocity),
            ("wind.boost_height", self.wind.boost_height),
            ("wind.boost_speed", self.wind.boost_speed),
            ("wind.duration", self.wind.duration),
            ("camera.look_threshold", self.camera.look_threshold),
        ];
        let signed = [
            ("gravity", self.gravity),
            ("glide_gravity", self.glide_gravity),
            ("landing_velocity", self.landing_velocity),
            ("grounded_offset", self.grounded_offset),
            ("camera.top_clamp", self.camera.top_clamp),
            ("camera.bottom_clamp", self.camera.bottom_clamp),
            ("camera.angle_override", self.camera.angle_override),
        ];

        for (field, value) in non_negative.iter().chain(signed.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: *field,
                    value: *value,
                });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.camera.bottom_clamp > self.camera.top_clamp {
            return Err(ConfigError::InvertedPitchClamp {
                bottom: self.camera.bottom_clamp,
                top: self.camera.top_clamp,
            });
        }
        Ok(())
    }

    /// Launch velocity reaching `height` under this gravity: `sqrt(h * 2 * |g|)`.
    #[inline]
    pub fn launch_velocity(&self, height: f32) -> f32 {
        (height * 2.0 * self.gravity.abs()).sqrt()
    }
}
