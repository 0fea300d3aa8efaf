//! Character Controller
//!
//! Composition root for one character: the locomotion state machine, the
//! camera heading, the task scheduler and the injected probe and mover.
//!
//! # Frame Order
//!
//! 1. Locomotion update against the mover's current position
//! 2. Scheduled tasks advance; completions are applied to the locomotion state
//! 3. Mover applies locomotion + task displacement
//! 4. Camera heading integrates the look input
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use wayfarer_engine::player::{CharacterController, KinematicBody};
//!
//! let world = Rc::new(world);
//! let mut controller = CharacterController::builder(config)
//!     .probe(Rc::clone(&world))
//!     .mover(KinematicBody::new(Rc::clone(&world), spawn))
//!     .build()?;
//!
//! // Each frame
//! let report = controller.tick(input.snapshot(), dt);
//! ```

use glam::Vec3;
use tracing::{info, warn};

use super::locomotion::Locomotion;
use super::mover::CharacterMover;
use super::scheduler::{TaskCompletion, TaskId, TaskKind, TaskScheduler};
use super::state::{AnimationSignal, LocomotionMode};
use crate::camera::CameraHeading;
use crate::config::LocomotionConfig;
use crate::error::ControllerError;
use crate::input::InputSnapshot;
use crate::physics::SurfaceProbe;

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Displacement requested from the mover (locomotion + tasks)
    pub displacement: Vec3,
    /// Feet position after the move
    pub position: Vec3,
    /// Mode at the end of the tick
    pub mode: LocomotionMode,
    /// Animation signals emitted this tick, including events since the last tick
    pub signals: Vec<AnimationSignal>,
}

/// Builder for [`CharacterController`].
pub struct CharacterControllerBuilder<P, M> {
    config: LocomotionConfig,
    probe: Option<P>,
    mover: Option<M>,
    facing_yaw: f32,
    camera_pitch: f32,
    glidable: bool,
}

impl<P: SurfaceProbe, M: CharacterMover> CharacterControllerBuilder<P, M> {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            probe: None,
            mover: None,
            facing_yaw: 0.0,
            camera_pitch: 0.0,
            glidable: true,
        }
    }

    /// Environment queries for the state machine.
    pub fn probe(mut self, probe: P) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Mover that owns the character's position.
    pub fn mover(mut self, mover: M) -> Self {
        self.mover = Some(mover);
        self
    }

    /// Initial facing and camera yaw in degrees.
    pub fn facing_yaw(mut self, yaw: f32) -> Self {
        self.facing_yaw = yaw;
        self
    }

    /// Initial camera pitch in degrees (clamped).
    pub fn camera_pitch(mut self, pitch: f32) -> Self {
        self.camera_pitch = pitch;
        self
    }

    /// Whether gliding is allowed from the start (default true).
    pub fn glidable(mut self, glidable: bool) -> Self {
        self.glidable = glidable;
        self
    }

    pub fn build(self) -> Result<CharacterController<P, M>, ControllerError> {
        self.config.validate()?;
        let probe = self
            .probe
            .ok_or(ControllerError::MissingCollaborator("surface probe"))?;
        let mover = self
            .mover
            .ok_or(ControllerError::MissingCollaborator("character mover"))?;

        let camera =
            CameraHeading::from_orientation(&self.config.camera, self.facing_yaw, self.camera_pitch);
        let mut locomotion = Locomotion::new(self.config, self.facing_yaw);
        locomotion.set_glidable(self.glidable);

        info!(
            position = ?mover.position(),
            facing_yaw = locomotion.facing_yaw(),
            "character controller ready"
        );

        Ok(CharacterController {
            locomotion,
            camera,
            scheduler: TaskScheduler::new(),
            probe,
            mover,
        })
    }
}

/// One controllable third-person character.
pub struct CharacterController<P, M> {
    locomotion: Locomotion,
    camera: CameraHeading,
    scheduler: TaskScheduler,
    probe: P,
    mover: M,
}

impl<P: SurfaceProbe, M: CharacterMover> CharacterController<P, M> {
    pub fn builder(config: LocomotionConfig) -> CharacterControllerBuilder<P, M> {
        CharacterControllerBuilder::new(config)
    }

    /// Advance one frame.
    ///
    /// A negative or non-finite `dt` skips the frame entirely.
    pub fn tick(&mut self, mut input: InputSnapshot, dt: f32) -> TickReport {
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "skipping tick with invalid delta time");
            return self.report(Vec3::ZERO);
        }

        let position = self.mover.position();
        let mut displacement =
            self.locomotion.update(&mut input, &self.probe, position, &self.camera, dt);

        // A wind boost owns the height; vertical velocity keeps integrating
        // underneath until the boost completes and overwrites it
        if self.scheduler.holds_vertical() {
            displacement.y = 0.0;
        }

        let tasks = self.scheduler.advance(dt);
        displacement += tasks.displacement;
        for completion in tasks.completed {
            match completion {
                TaskCompletion::WindBoost(_) => self.locomotion.complete_wind_boost(),
            }
        }

        self.mover.move_by(displacement);
        self.camera.update(input.look, input.device, dt);

        self.report(displacement)
    }

    fn report(&mut self, displacement: Vec3) -> TickReport {
        TickReport {
            displacement,
            position: self.mover.position(),
            mode: self.locomotion.mode(),
            signals: self.locomotion.drain_signals(),
        }
    }

    // ---- Events ----

    /// Launch from a jump pad.
    pub fn jump_pad_jump(&mut self) {
        self.locomotion.jump_pad_jump();
    }

    /// Start a wind boost: carry the character up and along its facing over
    /// the configured duration, then stop its vertical motion.
    ///
    /// Gravity does not move the character while the boost runs.
    pub fn wind_effect(&mut self) -> TaskId {
        let offset = self.locomotion.begin_wind_boost();
        let duration = self.locomotion.config().wind.duration;
        info!(?offset, duration, "wind boost");
        self.scheduler.schedule(TaskKind::WindBoost { offset }, duration)
    }

    /// Allow or forbid gliding.
    pub fn set_glidable(&mut self, glidable: bool) {
        self.locomotion.set_glidable(glidable);
    }

    // ---- Accessors ----

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn camera(&self) -> &CameraHeading {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraHeading {
        &mut self.camera
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    /// Feet position.
    pub fn position(&self) -> Vec3 {
        self.mover.position()
    }
}
