//! Pointer Look Accumulator
//!
//! Raw pointer motion arrives many times per frame; it accumulates here and is
//! consumed once per tick as a look delta in degrees.

use glam::Vec2;

/// Degrees of camera rotation per pixel of pointer motion.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;

/// Accumulates pointer deltas between ticks.
///
/// Positive `dy` (pointer moved down the screen) produces positive pitch,
/// which tilts the camera down.
#[derive(Debug, Clone)]
pub struct PointerLook {
    /// Accumulated delta since last consume (pixels).
    delta: Vec2,
    /// Whether the cursor is captured; uncaptured motion is ignored.
    captured: bool,
    /// Degrees per pixel
    pub sensitivity: f32,
}

impl Default for PointerLook {
    fn default() -> Self {
        Self {
            delta: Vec2::ZERO,
            captured: false,
            sensitivity: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

impl PointerLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw pointer motion. Ignored while the cursor is not captured.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        if self.captured {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Return the accumulated motion in degrees and reset it.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta) * self.sensitivity
    }

    /// Capture or release the cursor. Releasing drops pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Pending motion in pixels, without consuming it.
    #[inline]
    pub fn peek(&self) -> Vec2 {
        self.delta
    }
}
