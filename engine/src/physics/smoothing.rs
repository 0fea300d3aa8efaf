//! Smoothing and angle helpers
//!
//! Frame-rate independent damping, clamped interpolation and degree-based
//! angle utilities shared by the locomotion and camera code.
//!
//! # Yaw Convention
//!
//! Angles are in degrees. Yaw 0 faces +Z, yaw 90 faces +X (clockwise when
//! seen from above), so `forward = (sin yaw, 0, cos yaw)`.

use glam::Vec3;

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Round to 0.001, half away from zero.
#[inline]
pub fn round_to_millis(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Wrap `t` into `[0, length)`.
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = repeat(angle, 360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Fold an angle once into `[-360, 360]` and clamp it to `[min, max]`.
///
/// Only a single 360 is added or subtracted; callers run this every frame so
/// the angle never drifts further than one turn out of range.
pub fn clamp_angle(mut angle: f32, min: f32, max: f32) -> f32 {
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}

/// Critically damped spring toward `target`.
///
/// `velocity` is carried between calls. Overshoot past the target is
/// detected and corrected, so the result never crosses the target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;

    // Pade approximation of exp(-omega * dt)
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let desired = target;
    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (desired - current > 0.0) == (output > desired) {
        output = desired;
        *velocity = if dt > 0.0 { (output - desired) / dt } else { 0.0 };
    }

    output
}

/// [`smooth_damp`] for angles in degrees, taking the shortest way around.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, f32::INFINITY, dt)
}

/// Horizontal unit vector for a yaw in degrees.
#[inline]
pub fn yaw_forward(yaw_degrees: f32) -> Vec3 {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    Vec3::new(sin, 0.0, cos)
}

/// Yaw in degrees of a horizontal direction; `(0, 0, 1)` is 0.
#[inline]
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z).to_degrees()
}
