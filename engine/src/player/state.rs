//! Locomotion mode and animation signals
//!
//! [`LocomotionMode`] is the single source of truth for what the character is
//! doing; gliding and climbing are variants, not flags, so they can never be
//! active together. [`AnimationSignal`] is the typed vocabulary the state
//! machine emits for the animation collaborator.

use std::fmt;

use glam::Vec3;

/// Contact with a climbable wall, recorded when the grab ray hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbContact {
    /// Horizontal unit direction the wall was found in
    pub grab_direction: Vec3,
    /// Outward surface normal of the wall
    pub wall_normal: Vec3,
}

/// What the character is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocomotionMode {
    /// On walkable ground
    #[default]
    Grounded,
    /// Jumping or falling under normal gravity
    Airborne,
    /// Falling under glide gravity
    Gliding,
    /// Attached to a climbable wall; gravity suspended
    Climbing(ClimbContact),
}

impl LocomotionMode {
    #[inline]
    pub fn is_grounded(&self) -> bool {
        matches!(self, LocomotionMode::Grounded)
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        matches!(self, LocomotionMode::Airborne)
    }

    #[inline]
    pub fn is_gliding(&self) -> bool {
        matches!(self, LocomotionMode::Gliding)
    }

    #[inline]
    pub fn is_climbing(&self) -> bool {
        matches!(self, LocomotionMode::Climbing(_))
    }

    /// The wall contact, only while climbing.
    pub fn climb_contact(&self) -> Option<&ClimbContact> {
        match self {
            LocomotionMode::Climbing(contact) => Some(contact),
            _ => None,
        }
    }

    /// Short stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            LocomotionMode::Grounded => "grounded",
            LocomotionMode::Airborne => "airborne",
            LocomotionMode::Gliding => "gliding",
            LocomotionMode::Climbing(_) => "climbing",
        }
    }
}

impl fmt::Display for LocomotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Animation parameters emitted each tick.
///
/// The animation collaborator maps each variant onto its own parameter
/// handles; the state machine never names animation assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSignal {
    Grounded(bool),
    Jump(bool),
    FreeFall(bool),
    Gliding(bool),
    Climb(bool),
    /// Vertical climb input, -1 (down) to 1 (up)
    ClimbDirection(f32),
    /// Smoothed locomotion speed for blend trees
    Speed(f32),
    /// Input deflection scale (1 for digital input)
    MotionSpeed(f32),
}
