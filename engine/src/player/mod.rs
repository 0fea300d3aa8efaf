//! Player Module
//!
//! Third-person character locomotion and control.
//!
//! # Components
//!
//! - [`CharacterController`] - Per-character composition root; ticks locomotion, tasks, mover and camera
//! - [`Locomotion`] - Walk / jump / fall / glide / climb state machine
//!   - Produces a displacement per tick, never moves anything itself
//!   - Emits typed [`AnimationSignal`]s
//! - [`TaskScheduler`] - Timed effects such as the wind boost
//! - [`CharacterMover`] - Displacement sink; [`KinematicBody`] slides a box through a [`StaticWorld`]
//!
//! [`StaticWorld`]: crate::physics::StaticWorld

pub mod climb;
pub mod controller;
pub mod locomotion;
pub mod mover;
pub mod scheduler;
pub mod state;

pub use climb::ClimbRelease;
pub use controller::{CharacterController, CharacterControllerBuilder, TickReport};
pub use locomotion::{BLEND_SNAP, Locomotion, SPEED_OFFSET};
pub use mover::{CharacterMover, KinematicBody};
pub use scheduler::{TaskCompletion, TaskId, TaskKind, TaskScheduler, TaskTick, ease_out_quad};
pub use state::{AnimationSignal, ClimbContact, LocomotionMode};
