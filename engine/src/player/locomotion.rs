//! Locomotion State Machine
//!
//! Per-tick locomotion for a kinematic third-person character: ground
//! detection, jump and gravity integration, speed smoothing, facing rotation,
//! gliding and wall climbing. The state machine never moves anything itself;
//! [`Locomotion::update`] returns the displacement for the mover to apply.
//!
//! # Tick Order
//!
//! 1. Ground probe (skipped while climbing, which counts as grounded)
//! 2. Jump / glide / gravity on the vertical velocity
//! 3. Horizontal speed toward the walk or sprint target
//! 4. Facing yaw toward the camera-relative input direction
//! 5. Climb grab / release
//! 6. Displacement = horizontal direction * speed * dt + vertical * dt
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfarer_engine::player::Locomotion;
//!
//! let mut locomotion = Locomotion::new(config.clone(), spawn_yaw);
//!
//! // Each frame
//! let displacement = locomotion.update(&mut input, &world, position, &camera, dt);
//! mover.move_by(displacement);
//! for signal in locomotion.drain_signals() {
//!     animator.apply(signal);
//! }
//! ```

use glam::Vec3;
use tracing::{debug, trace, warn};

use super::climb::{self, ClimbRelease};
use super::state::{AnimationSignal, ClimbContact, LocomotionMode};
use crate::camera::CameraHeading;
use crate::config::LocomotionConfig;
use crate::input::InputSnapshot;
use crate::physics::SurfaceProbe;
use crate::physics::smoothing::{
    lerp, normalize_degrees, round_to_millis, smooth_damp_angle, yaw_forward,
    yaw_from_direction,
};

/// Speed within this band of the target snaps to it exactly.
pub const SPEED_OFFSET: f32 = 0.1;

/// Animation blend below this value is forced to zero.
pub const BLEND_SNAP: f32 = 0.01;

/// Locomotion state for one character.
#[derive(Debug, Clone)]
pub struct Locomotion {
    config: LocomotionConfig,

    /// Current high-level mode
    mode: LocomotionMode,

    /// Result of the latest ground probe (forced true while climbing)
    grounded: bool,

    /// Vertical velocity in m/s (positive = upward)
    vertical_velocity: f32,

    /// Smoothed horizontal speed in m/s, quantized to 0.001 while changing
    horizontal_speed: f32,

    /// Animation blend value following the target speed
    animation_blend: f32,

    /// Character facing in degrees, normalized to [0, 360)
    facing_yaw: f32,

    /// Last requested heading in degrees (camera-relative input direction)
    target_yaw: f32,

    /// Angular velocity carried by the facing spring
    rotation_velocity: f32,

    /// Set by a jump (or jump pad / wind); cleared on landing
    has_jumped: bool,

    /// Whether gliding is currently allowed
    glidable: bool,

    /// Countdown restarted while airborne, decremented while grounded
    jump_timeout_remaining: f32,

    /// Countdown restarted while grounded, decremented while airborne
    fall_timeout_remaining: f32,

    /// Signals emitted since the last drain
    signals: Vec<AnimationSignal>,
}

impl Locomotion {
    /// Create a grounded, idle character facing `facing_yaw` degrees.
    ///
    /// Gliding starts enabled.
    pub fn new(config: LocomotionConfig, facing_yaw: f32) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid locomotion tunables");
        let facing_yaw = normalize_degrees(facing_yaw);
        Self {
            mode: LocomotionMode::Grounded,
            grounded: true,
            vertical_velocity: 0.0,
            horizontal_speed: 0.0,
            animation_blend: 0.0,
            facing_yaw,
            target_yaw: facing_yaw,
            rotation_velocity: 0.0,
            has_jumped: false,
            glidable: true,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
            signals: Vec::new(),
            config,
        }
    }

    /// Run one tick and return the displacement to apply this frame.
    ///
    /// Consumes `input.jump`. `position` is the character's feet position
    /// before the move; `camera` provides the yaw movement is relative to.
    pub fn update<P: SurfaceProbe + ?Sized>(
        &mut self,
        input: &mut InputSnapshot,
        probe: &P,
        position: Vec3,
        camera: &CameraHeading,
        dt: f32,
    ) -> Vec3 {
        self.ground_check(probe, position);
        self.jump_and_gravity(input, probe, position, dt);
        let target_speed = self.update_speed(input, dt);
        self.update_facing(input, camera, dt);

        let mut direction = self.movement_direction(input, camera, target_speed);
        self.update_climbing(probe, position, input, target_speed, &mut direction);

        if !self.vertical_velocity.is_finite() {
            warn!(
                vertical_velocity = self.vertical_velocity,
                "non-finite vertical velocity, resetting"
            );
            self.vertical_velocity = 0.0;
        }

        self.signals.push(AnimationSignal::Speed(self.animation_blend));
        self.signals.push(AnimationSignal::MotionSpeed(input.input_magnitude()));

        let displacement = direction.normalize_or_zero() * (self.horizontal_speed * dt)
            + Vec3::Y * (self.vertical_velocity * dt);
        if !displacement.is_finite() {
            warn!(?displacement, "non-finite displacement, dropping");
            return Vec3::ZERO;
        }

        trace!(
            mode = %self.mode,
            speed = self.horizontal_speed,
            vertical_velocity = self.vertical_velocity,
            "locomotion tick"
        );
        displacement
    }

    fn ground_check<P: SurfaceProbe + ?Sized>(&mut self, probe: &P, position: Vec3) {
        let was_grounded = self.grounded;

        if self.mode.is_climbing() {
            self.grounded = true;
        } else {
            let center = position - Vec3::Y * self.config.grounded_offset;
            self.grounded = probe.check_ground(center, self.config.grounded_radius);
        }

        if self.grounded && !was_grounded {
            self.has_jumped = false;
        }

        let next = match self.mode {
            LocomotionMode::Climbing(_) => self.mode,
            _ if self.grounded => LocomotionMode::Grounded,
            LocomotionMode::Grounded => LocomotionMode::Airborne,
            other => other,
        };
        self.set_mode(next);

        self.signals.push(AnimationSignal::Grounded(self.grounded));
    }

    fn jump_and_gravity<P: SurfaceProbe + ?Sized>(
        &mut self,
        input: &mut InputSnapshot,
        probe: &P,
        position: Vec3,
        dt: f32,
    ) {
        let jump = input.consume_jump();

        if self.grounded {
            self.fall_timeout_remaining = self.config.fall_timeout;
            self.signals.push(AnimationSignal::Jump(false));
            self.signals.push(AnimationSignal::FreeFall(false));
            self.signals.push(AnimationSignal::Gliding(false));

            // Keep the character pressed onto the ground
            if self.vertical_velocity < 0.0 {
                self.vertical_velocity = self.config.landing_velocity;
            }

            if jump && !self.has_jumped {
                self.vertical_velocity = self.config.launch_velocity(self.config.jump_height);
                self.has_jumped = true;
                self.signals.push(AnimationSignal::Jump(true));
                debug!(velocity = self.vertical_velocity, "jump");
            }

            if self.jump_timeout_remaining >= 0.0 {
                self.jump_timeout_remaining -= dt;
            }
            return;
        }

        self.jump_timeout_remaining = self.config.jump_timeout;

        if jump {
            if self.mode.is_gliding() {
                self.set_mode(LocomotionMode::Airborne);
                self.signals.push(AnimationSignal::Gliding(false));
            } else if self.glidable
                && !probe.has_ground_within(position, self.config.glide_check_distance)
            {
                self.set_mode(LocomotionMode::Gliding);
                self.vertical_velocity = 0.0;
                self.signals.push(AnimationSignal::Gliding(true));
            }
        }

        if self.fall_timeout_remaining >= 0.0 {
            self.fall_timeout_remaining -= dt;
        }
        self.signals.push(AnimationSignal::FreeFall(true));

        let gravity = if self.mode.is_gliding() {
            self.config.glide_gravity
        } else {
            self.config.gravity
        };
        self.vertical_velocity =
            (self.vertical_velocity + gravity * dt).max(-self.config.terminal_velocity);
    }

    /// Move the horizontal speed toward the target and return the target.
    fn update_speed(&mut self, input: &InputSnapshot, dt: f32) -> f32 {
        let target_speed = if !input.has_move() {
            0.0
        } else if input.sprint {
            self.config.sprint_speed
        } else {
            self.config.move_speed
        };

        let rate = dt * self.config.speed_change_rate;
        let current = self.horizontal_speed;
        self.horizontal_speed = if (current - target_speed).abs() > SPEED_OFFSET {
            round_to_millis(lerp(current, target_speed * input.input_magnitude(), rate))
        } else {
            target_speed
        };

        self.animation_blend = lerp(self.animation_blend, target_speed, rate);
        if self.animation_blend < BLEND_SNAP {
            self.animation_blend = 0.0;
        }

        target_speed
    }

    fn update_facing(&mut self, input: &InputSnapshot, camera: &CameraHeading, dt: f32) {
        if !input.has_move() {
            return;
        }

        let axis = input.move_axis;
        self.target_yaw = yaw_from_direction(Vec3::new(axis.x, 0.0, axis.y)) + camera.yaw();

        // While climbing the wall dictates facing; the target heading is still
        // tracked so climbing down can be detected.
        if self.mode.is_climbing() {
            return;
        }

        let yaw = smooth_damp_angle(
            self.facing_yaw,
            self.target_yaw,
            &mut self.rotation_velocity,
            self.config.rotation_smooth_time,
            dt,
        );
        self.facing_yaw = normalize_degrees(yaw);
    }

    /// Horizontal movement component before normalization.
    fn movement_direction(
        &self,
        input: &InputSnapshot,
        camera: &CameraHeading,
        target_speed: f32,
    ) -> Vec3 {
        match self.mode {
            LocomotionMode::Gliding => {
                let axis = input.move_axis.normalize_or_zero();
                camera.planar_direction(axis) * (target_speed * self.config.glide_movement_speed)
            }
            LocomotionMode::Climbing(_) => yaw_forward(self.target_yaw),
            _ if input.has_move() => yaw_forward(self.target_yaw) * target_speed,
            _ => Vec3::ZERO,
        }
    }

    fn update_climbing<P: SurfaceProbe + ?Sized>(
        &mut self,
        probe: &P,
        position: Vec3,
        input: &InputSnapshot,
        target_speed: f32,
        direction: &mut Vec3,
    ) {
        match self.mode {
            LocomotionMode::Climbing(contact) => {
                let heading = if input.has_move() { *direction } else { Vec3::ZERO };
                match climb::check_release(probe, &self.config, position, &contact, heading) {
                    ClimbRelease::Hold => {}
                    ClimbRelease::LostWall => {
                        self.grounded = false;
                        self.vertical_velocity = self.config.wall_release_velocity;
                        self.set_mode(LocomotionMode::Airborne);
                        self.signals.push(AnimationSignal::Climb(false));
                        return;
                    }
                    ClimbRelease::ReachedBottom => {
                        self.set_mode(LocomotionMode::Grounded);
                        self.signals.push(AnimationSignal::Climb(false));
                        return;
                    }
                }
            }
            _ => {
                let Some(contact) = climb::try_grab(probe, &self.config, position, *direction)
                else {
                    return;
                };
                self.set_mode(LocomotionMode::Climbing(contact));
            }
        }

        if let LocomotionMode::Climbing(contact) = self.mode {
            self.apply_climb(&contact, input, target_speed, direction);
        }
    }

    /// Pin the character to the wall: face it, suspend gravity and turn the
    /// forward input into vertical movement.
    fn apply_climb(
        &mut self,
        contact: &ClimbContact,
        input: &InputSnapshot,
        target_speed: f32,
        direction: &mut Vec3,
    ) {
        self.facing_yaw = normalize_degrees(yaw_from_direction(-contact.wall_normal));
        self.rotation_velocity = 0.0;
        self.horizontal_speed = target_speed;
        self.vertical_velocity = 0.0;
        self.grounded = true;

        let climb_axis = input.move_axis.y.clamp(-1.0, 1.0);
        *direction = Vec3::new(0.0, climb_axis, 0.0);

        self.signals.push(AnimationSignal::Climb(true));
        self.signals.push(AnimationSignal::ClimbDirection(climb_axis));
    }

    fn set_mode(&mut self, mode: LocomotionMode) {
        if std::mem::discriminant(&self.mode) != std::mem::discriminant(&mode) {
            debug!(from = %self.mode, to = %mode, "locomotion mode change");
        }
        self.mode = mode;
    }

    // ---- External events ----

    /// Launch from a jump pad.
    ///
    /// Ends any glide or climb, treats the character as grounded this tick
    /// and sets the vertical velocity for `jump_pad_height`.
    pub fn jump_pad_jump(&mut self) {
        self.grounded = true;
        self.has_jumped = true;
        self.vertical_velocity = self.config.launch_velocity(self.config.jump_pad_height);
        match self.mode {
            LocomotionMode::Climbing(_) => self.signals.push(AnimationSignal::Climb(false)),
            LocomotionMode::Gliding => self.signals.push(AnimationSignal::Gliding(false)),
            _ => {}
        }
        self.set_mode(LocomotionMode::Grounded);
        debug!(velocity = self.vertical_velocity, "jump pad launch");
    }

    /// Allow or forbid gliding.
    ///
    /// Disabling does not end a glide already in progress.
    pub fn set_glidable(&mut self, glidable: bool) {
        if self.glidable != glidable {
            debug!(glidable, "glidable changed");
        }
        self.glidable = glidable;
    }

    /// Latch the jump flag for a wind boost and return the offset the boost
    /// should carry the character by.
    pub(crate) fn begin_wind_boost(&mut self) -> Vec3 {
        self.has_jumped = true;
        let wind = &self.config.wind;
        Vec3::Y * wind.boost_height + yaw_forward(self.facing_yaw) * wind.boost_speed
    }

    /// A wind boost finished: the boost ends in a standstill.
    pub(crate) fn complete_wind_boost(&mut self) {
        self.vertical_velocity = 0.0;
        debug!("wind boost complete");
    }

    // ---- Accessors ----

    /// Get the current mode.
    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    /// Check whether the latest ground probe succeeded (always true while climbing).
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Get the vertical velocity in m/s.
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Get the smoothed horizontal speed in m/s.
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_speed
    }

    /// Get the smoothed speed fed to the animation blend tree.
    pub fn animation_blend(&self) -> f32 {
        self.animation_blend
    }

    /// Get the character facing in degrees, in [0, 360).
    pub fn facing_yaw(&self) -> f32 {
        self.facing_yaw
    }

    /// Get the last requested heading in degrees.
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Check whether a jump has been taken since the last landing.
    pub fn has_jumped(&self) -> bool {
        self.has_jumped
    }

    /// Check whether gliding is currently allowed.
    pub fn is_glidable(&self) -> bool {
        self.glidable
    }

    /// Get the remaining jump timeout in seconds.
    pub fn jump_timeout_remaining(&self) -> f32 {
        self.jump_timeout_remaining
    }

    /// Get the remaining fall timeout in seconds.
    pub fn fall_timeout_remaining(&self) -> f32 {
        self.fall_timeout_remaining
    }

    /// Signals emitted since the last [`drain_signals`](Self::drain_signals).
    pub fn signals(&self) -> &[AnimationSignal] {
        &self.signals
    }

    /// Take all pending signals, oldest first.
    pub fn drain_signals(&mut self) -> Vec<AnimationSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Get the tunables this state machine runs with.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }
}
