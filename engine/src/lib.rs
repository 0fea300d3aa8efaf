//! Wayfarer Engine Library
//!
//! Kinematic third-person locomotion: walking, sprinting, jumping, falling,
//! gliding and wall climbing, with a yaw/pitch follow-camera heading and
//! timed effects such as wind boosts. Rendering, physics simulation and
//! animation playback are left to the embedding application; it supplies a
//! [`SurfaceProbe`](physics::SurfaceProbe) for environment queries and a
//! [`CharacterMover`](player::CharacterMover) that owns the position.
//!
//! # Modules
//!
//! - [`player`] - Locomotion state machine, controller, mover and task scheduler
//! - [`camera`] - Follow-camera yaw/pitch tracking
//! - [`input`] - Per-tick input snapshots and keyboard / pointer state
//! - [`physics`] - Collision primitives, surface probes and the static test world
//! - [`config`] - Tunables with JSON loading and validation
//! - [`error`] - Configuration and assembly errors
//! - [`logging`] - Stock `tracing` subscriber for binaries
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use wayfarer_engine::{CharacterController, InputSnapshot, KinematicBody, LocomotionConfig};
//!
//! let world = Rc::new(world);
//! let mut controller = CharacterController::builder(LocomotionConfig::default())
//!     .probe(Rc::clone(&world))
//!     .mover(KinematicBody::new(Rc::clone(&world), spawn))
//!     .glidable(true)
//!     .build()?;
//!
//! // Each frame
//! let report = controller.tick(InputSnapshot::moving(0.0, 1.0).with_sprint(true), dt);
//! for signal in report.signals {
//!     animator.apply(signal);
//! }
//!
//! // Gameplay triggers
//! controller.jump_pad_jump();
//! controller.wind_effect();
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;

pub use camera::CameraHeading;
pub use config::{CameraConfig, LocomotionConfig, WindConfig};
pub use error::{ConfigError, ControllerError};
pub use input::{InputDevice, InputSnapshot, InputState, KeyCode, KeyboardState};
pub use physics::{StaticWorld, SurfaceProbe};
pub use player::{
    AnimationSignal, CharacterController, CharacterMover, KinematicBody, Locomotion,
    LocomotionMode, TickReport,
};
