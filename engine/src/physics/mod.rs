//! Physics module
//!
//! Environment geometry and the read-only queries the locomotion state
//! machine runs against it. Built without an external physics library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Angles in degrees
//!
//! # Submodules
//!
//! - [`collision`] - Tagged boxes, ray-AABB and sphere-AABB tests
//! - [`probe`] - The [`SurfaceProbe`] trait (ground, climbable, clearance)
//! - [`world`] - [`StaticWorld`], a concrete probe over tagged boxes
//! - [`smoothing`] - Damping, interpolation and angle helpers

pub mod collision;
pub mod probe;
pub mod smoothing;
pub mod world;

pub use collision::{Aabb, Collider, Surface, SurfaceHit, ray_aabb_intersect, sphere_aabb_overlap};
pub use probe::SurfaceProbe;
pub use world::StaticWorld;
