//! Config Module
//!
//! Centralized, serde-backed tunables for locomotion and the camera heading.

pub mod camera_config;
pub mod locomotion_config;

pub use camera_config::CameraConfig;
pub use locomotion_config::{LocomotionConfig, WindConfig};

static_assertions::assert_impl_all!(LocomotionConfig: Send, Sync, Clone);
