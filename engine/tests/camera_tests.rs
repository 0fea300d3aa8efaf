//! Camera Tests - Heading, Clamping and Input Pipeline
//!
//! Tests for the follow-camera heading and the keyboard/pointer path that
//! feeds it.

use glam::{Vec2, Vec3};
use proptest::prelude::*;

use wayfarer_engine::camera::CameraHeading;
use wayfarer_engine::config::{CameraConfig, LocomotionConfig};
use wayfarer_engine::input::{InputDevice, InputState, KeyCode};

// ============================================================================
// CameraHeading Tests
// ============================================================================

#[test]
fn test_heading_default_config() {
    let heading = CameraHeading::new(&CameraConfig::default(), 0.0);

    assert_eq!(heading.yaw(), 0.0);
    assert_eq!(heading.pitch(), 0.0);
    assert_eq!(heading.pitch_limits(), (-30.0, 70.0));
    assert!(!heading.is_locked());
}

#[test]
fn test_heading_forward_yaw_zero() {
    let heading = CameraHeading::new(&CameraConfig::default(), 0.0);
    assert!((heading.forward() - Vec3::Z).length() < 1e-5);
}

#[test]
fn test_heading_pitch_stays_clamped_without_input() {
    let config = CameraConfig {
        top_clamp: 10.0,
        bottom_clamp: -10.0,
        ..Default::default()
    };
    let mut heading = CameraHeading::from_orientation(&config, 0.0, 60.0);
    assert_eq!(heading.pitch(), 10.0);

    heading.update(Vec2::ZERO, InputDevice::Pointer, 0.016);
    assert_eq!(heading.pitch(), 10.0);
    heading.update(Vec2::new(0.0, -0.05), InputDevice::Pointer, 0.016);
    assert_eq!(heading.pitch(), 10.0);
}

#[test]
fn test_heading_gamepad_turn_rate() {
    let mut heading = CameraHeading::new(&CameraConfig::default(), 0.0);
    // 90 deg/s for one second of ticks
    for _ in 0..60 {
        heading.update(Vec2::new(90.0, 0.0), InputDevice::Gamepad, 1.0 / 60.0);
    }
    assert!((heading.yaw() - 90.0).abs() < 1e-2);
}

#[test]
fn test_heading_negative_yaw_folds() {
    let mut heading = CameraHeading::new(&CameraConfig::default(), -350.0);
    heading.update(Vec2::new(-20.0, 0.0), InputDevice::Pointer, 0.016);
    assert!((heading.yaw() + 10.0).abs() < 1e-4);
}

#[test]
fn test_heading_from_config_file_values() {
    let config = LocomotionConfig::from_json_str(
        r#"{ "camera": { "top_clamp": 45.0, "bottom_clamp": -10.0, "angle_override": 2.0 } }"#,
    )
    .unwrap();
    let mut heading = CameraHeading::new(&config.camera, 0.0);
    heading.update(Vec2::new(0.0, 100.0), InputDevice::Pointer, 0.016);
    assert_eq!(heading.pitch(), 45.0);
    assert_eq!(heading.orientation().x, 47.0);
}

// ============================================================================
// Input Pipeline Tests
// ============================================================================

#[test]
fn test_pointer_motion_reaches_heading() {
    let mut input = InputState::new();
    input.pointer.set_captured(true);
    input.pointer.accumulate(100.0, -50.0);

    let snapshot = input.snapshot();
    let mut heading = CameraHeading::new(&CameraConfig::default(), 0.0);
    heading.update(snapshot.look, snapshot.device, 0.016);

    // Default sensitivity is 0.1 degrees per pixel
    assert!((heading.yaw() - 10.0).abs() < 1e-4);
    assert!((heading.pitch() + 5.0).abs() < 1e-4);
}

#[test]
fn test_uncaptured_pointer_ignored() {
    let mut input = InputState::new();
    input.pointer.accumulate(100.0, 100.0);
    let snapshot = input.snapshot();
    assert_eq!(snapshot.look, Vec2::ZERO);
}

#[test]
fn test_keyboard_diagonal_axis() {
    let mut input = InputState::new();
    input.keyboard.handle_key(KeyCode::W, true);
    input.keyboard.handle_key(KeyCode::D, true);
    let snapshot = input.snapshot();
    assert_eq!(snapshot.move_axis, Vec2::new(1.0, 1.0));

    input.keyboard.handle_key(KeyCode::W, false);
    input.keyboard.handle_key(KeyCode::S, true);
    assert_eq!(input.snapshot().move_axis, Vec2::new(1.0, -1.0));
}

#[test]
fn test_reset_clears_held_keys() {
    let mut input = InputState::new();
    input.keyboard.handle_key(KeyCode::W, true);
    input.keyboard.handle_key(KeyCode::ShiftLeft, true);
    input.reset();
    let snapshot = input.snapshot();
    assert!(!snapshot.has_move());
    assert!(!snapshot.sprint);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_pitch_always_within_limits(
        bottom in -89.0f32..0.0,
        top in 0.0f32..89.0,
        looks in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0, any::<bool>()), 1..60),
    ) {
        let config = CameraConfig {
            top_clamp: top,
            bottom_clamp: bottom,
            ..Default::default()
        };
        let mut heading = CameraHeading::new(&config, 0.0);
        for (x, y, gamepad) in looks {
            let device = if gamepad { InputDevice::Gamepad } else { InputDevice::Pointer };
            heading.update(Vec2::new(x, y), device, 1.0 / 60.0);
            prop_assert!(heading.pitch() >= bottom && heading.pitch() <= top);
        }
    }

    #[test]
    fn prop_locked_heading_never_moves(
        looks in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..30),
    ) {
        let config = CameraConfig {
            lock_position: true,
            ..Default::default()
        };
        let mut heading = CameraHeading::from_orientation(&config, 30.0, 15.0);
        for (x, y) in looks {
            heading.update(Vec2::new(x, y), InputDevice::Pointer, 1.0 / 60.0);
        }
        prop_assert_eq!(heading.yaw(), 30.0);
        prop_assert_eq!(heading.pitch(), 15.0);
    }
}
