//! Camera Heading Tracker
//!
//! Integrates look input into a yaw/pitch pair for a third-person follow
//! camera. The camera rig itself (follow distance, damping, collision) is not
//! modelled; its orientation is a pure function of this heading.
//!
//! Key features:
//! - Pointer deltas applied as-is, analog look scaled by frame time
//! - Pitch hard-clamped every tick, even without input
//! - Yaw folded into [-360, 360] but otherwise unbounded
//! - Lock flag freezes input while still producing an orientation

use glam::{EulerRot, Quat, Vec2, Vec3};
use tracing::warn;

use crate::config::CameraConfig;
use crate::input::InputDevice;
use crate::physics::smoothing::clamp_angle;

/// Camera yaw/pitch in degrees.
///
/// ## Usage
/// ```rust,ignore
/// let mut heading = CameraHeading::new(&config.camera, spawn_yaw);
///
/// // After the locomotion update each frame
/// heading.update(input.look, input.device, dt);
/// let euler = heading.orientation(); // (pitch + override, yaw, 0)
/// ```
#[derive(Clone, Debug)]
pub struct CameraHeading {
    /// Horizontal angle (degrees), positive turns right
    yaw: f32,
    /// Vertical angle (degrees), positive looks down
    pitch: f32,
    config: CameraConfig,
}

impl CameraHeading {
    /// Heading looking level along `initial_yaw`.
    pub fn new(config: &CameraConfig, initial_yaw: f32) -> Self {
        Self::from_orientation(config, initial_yaw, 0.0)
    }

    /// Heading initialized from an existing camera orientation.
    pub fn from_orientation(config: &CameraConfig, yaw: f32, pitch: f32) -> Self {
        debug_assert!(config.bottom_clamp <= config.top_clamp);
        Self {
            yaw: clamp_angle(yaw, f32::MIN, f32::MAX),
            pitch: clamp_angle(pitch, config.bottom_clamp, config.top_clamp),
            config: config.clone(),
        }
    }

    /// Apply one frame of look input and re-clamp.
    ///
    /// Input below the configured threshold, non-finite input, and any input
    /// while locked are ignored; clamping runs regardless.
    pub fn update(&mut self, look: Vec2, device: InputDevice, dt: f32) {
        if !look.is_finite() {
            warn!(?look, "ignoring non-finite look input");
        } else if look.length_squared() >= self.config.look_threshold
            && !self.config.lock_position
        {
            let multiplier = device.look_multiplier(dt);
            self.yaw += look.x * multiplier;
            self.pitch += look.y * multiplier;
        }

        self.yaw = clamp_angle(self.yaw, f32::MIN, f32::MAX);
        self.pitch = clamp_angle(self.pitch, self.config.bottom_clamp, self.config.top_clamp);
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Pitch limits in degrees (bottom, top)
    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        (self.config.bottom_clamp, self.config.top_clamp)
    }

    /// Force the pitch (clamped), e.g. from a scripted camera trigger.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = clamp_angle(pitch, self.config.bottom_clamp, self.config.top_clamp);
    }

    /// Freeze or release look input.
    pub fn set_locked(&mut self, locked: bool) {
        self.config.lock_position = locked;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.config.lock_position
    }

    /// Final camera orientation as Euler degrees `(pitch + override, yaw, 0)`.
    pub fn orientation(&self) -> Vec3 {
        Vec3::new(self.pitch + self.config.angle_override, self.yaw, 0.0)
    }

    /// Final camera orientation as a quaternion (yaw about Y, then pitch about X).
    pub fn rotation(&self) -> Quat {
        let euler = self.orientation();
        Quat::from_euler(
            EulerRot::YXZ,
            euler.y.to_radians(),
            euler.x.to_radians(),
            euler.z.to_radians(),
        )
    }

    /// Camera look direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Camera right direction.
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Camera-relative movement direction for an input axis, flattened onto
    /// the ground plane (not renormalized).
    pub fn planar_direction(&self, axis: Vec2) -> Vec3 {
        let mut direction = self.forward() * axis.y + self.right() * axis.x;
        direction.y = 0.0;
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> CameraHeading {
        CameraHeading::new(&CameraConfig::default(), 0.0)
    }

    #[test]
    fn test_pointer_input_not_scaled_by_dt() {
        let mut h = heading();
        h.update(Vec2::new(10.0, 5.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.yaw(), 10.0);
        assert_eq!(h.pitch(), 5.0);
    }

    #[test]
    fn test_gamepad_input_scaled_by_dt() {
        let mut h = heading();
        h.update(Vec2::new(100.0, 50.0), InputDevice::Gamepad, 0.1);
        assert!((h.yaw() - 10.0).abs() < 1e-5);
        assert!((h.pitch() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_small_input_ignored() {
        let mut h = heading();
        h.update(Vec2::new(0.05, 0.05), InputDevice::Pointer, 0.016);
        assert_eq!(h.yaw(), 0.0);
        assert_eq!(h.pitch(), 0.0);
    }

    #[test]
    fn test_pitch_clamped_to_limits() {
        let mut h = heading();
        h.update(Vec2::new(0.0, 500.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.pitch(), 70.0);
        h.update(Vec2::new(0.0, -5000.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.pitch(), -30.0);
    }

    #[test]
    fn test_yaw_folds_past_360() {
        let mut h = heading();
        h.update(Vec2::new(350.0, 0.0), InputDevice::Pointer, 0.016);
        h.update(Vec2::new(20.0, 0.0), InputDevice::Pointer, 0.016);
        assert!((h.yaw() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_locked_ignores_input_but_still_clamps() {
        let config = CameraConfig {
            lock_position: true,
            ..Default::default()
        };
        let mut h = CameraHeading::from_orientation(&config, 0.0, 0.0);
        h.update(Vec2::new(30.0, 30.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.yaw(), 0.0);
        assert_eq!(h.pitch(), 0.0);

        h.set_locked(false);
        h.update(Vec2::new(30.0, 30.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.yaw(), 30.0);
    }

    #[test]
    fn test_initial_pitch_is_clamped() {
        let h = CameraHeading::from_orientation(&CameraConfig::default(), 0.0, 120.0);
        assert_eq!(h.pitch(), 70.0);
    }

    #[test]
    fn test_orientation_includes_override() {
        let config = CameraConfig {
            angle_override: 5.0,
            ..Default::default()
        };
        let mut h = CameraHeading::new(&config, 45.0);
        h.set_pitch(10.0);
        assert_eq!(h.orientation(), Vec3::new(15.0, 45.0, 0.0));
    }

    #[test]
    fn test_forward_and_right_axes() {
        let h = CameraHeading::new(&CameraConfig::default(), 90.0);
        assert!((h.forward() - Vec3::X).length() < 1e-5);
        assert!((h.right() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_positive_pitch_looks_down() {
        let mut h = heading();
        h.set_pitch(30.0);
        assert!(h.forward().y < 0.0);
    }

    #[test]
    fn test_planar_direction_is_flat() {
        let mut h = heading();
        h.set_pitch(30.0);
        let dir = h.planar_direction(Vec2::new(0.0, 1.0));
        assert_eq!(dir.y, 0.0);
        assert!(dir.z > 0.0);
    }

    #[test]
    fn test_non_finite_look_ignored() {
        let mut h = heading();
        h.update(Vec2::new(f32::NAN, 1.0), InputDevice::Pointer, 0.016);
        assert_eq!(h.yaw(), 0.0);
        assert_eq!(h.pitch(), 0.0);
    }
}
