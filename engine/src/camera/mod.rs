//! Camera Module
//!
//! Camera heading tracking for a third-person follow camera.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod heading;

pub use heading::CameraHeading;
