//! Input Snapshot
//!
//! The per-tick input the locomotion controller consumes. Built once per frame
//! by the input layer (or a test script) and handed to
//! [`CharacterController::tick`](crate::player::CharacterController::tick).

use glam::Vec2;

/// Kind of device that produced the look input.
///
/// Pointer deltas are already per-frame and are applied as-is; analog sticks
/// report a rate and are scaled by frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDevice {
    /// Mouse / trackpad ("keyboard and mouse" scheme)
    #[default]
    Pointer,
    /// Gamepad or other polled analog device
    Gamepad,
}

impl InputDevice {
    /// Multiplier applied to look input for a frame of length `dt`.
    #[inline]
    pub fn look_multiplier(self, dt: f32) -> f32 {
        match self {
            InputDevice::Pointer => 1.0,
            InputDevice::Gamepad => dt,
        }
    }
}

/// One frame of player input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Movement axes: x = strafe (right positive), y = forward positive
    pub move_axis: Vec2,
    /// Look delta in degrees (pointer) or degrees per second (gamepad)
    pub look: Vec2,
    /// Sprint held
    pub sprint: bool,
    /// Jump pressed this frame; consumed exactly once per tick
    pub jump: bool,
    /// Movement axes are analog, so their magnitude scales target speed
    pub analog_movement: bool,
    /// Device that produced `look`
    pub device: InputDevice,
}

impl InputSnapshot {
    /// Snapshot with only movement axes set.
    pub fn moving(x: f32, y: f32) -> Self {
        Self {
            move_axis: Vec2::new(x, y),
            ..Default::default()
        }
    }

    /// Builder-style sprint flag.
    pub fn with_sprint(mut self, sprint: bool) -> Self {
        self.sprint = sprint;
        self
    }

    /// Builder-style jump flag.
    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// Builder-style look delta.
    pub fn with_look(mut self, look: Vec2, device: InputDevice) -> Self {
        self.look = look;
        self.device = device;
        self
    }

    /// Whether any movement is requested.
    #[inline]
    pub fn has_move(&self) -> bool {
        self.move_axis != Vec2::ZERO
    }

    /// Scale applied to the target speed: stick deflection for analog input,
    /// otherwise 1.
    #[inline]
    pub fn input_magnitude(&self) -> f32 {
        if self.analog_movement {
            self.move_axis.length()
        } else {
            1.0
        }
    }

    /// Take the jump flag, leaving it cleared.
    #[inline]
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }
}

static_assertions::assert_impl_all!(InputSnapshot: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let input = InputSnapshot::default();
        assert!(!input.has_move());
        assert!(!input.jump);
        assert_eq!(input.device, InputDevice::Pointer);
    }

    #[test]
    fn test_consume_jump_clears() {
        let mut input = InputSnapshot::default().with_jump(true);
        assert!(input.consume_jump());
        assert!(!input.jump);
        assert!(!input.consume_jump());
    }

    #[test]
    fn test_input_magnitude_digital_is_one() {
        let input = InputSnapshot::moving(0.3, 0.0);
        assert_eq!(input.input_magnitude(), 1.0);
    }

    #[test]
    fn test_input_magnitude_analog_uses_length() {
        let input = InputSnapshot {
            analog_movement: true,
            ..InputSnapshot::moving(0.3, 0.4)
        };
        assert!((input.input_magnitude() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_look_multiplier() {
        assert_eq!(InputDevice::Pointer.look_multiplier(0.016), 1.0);
        assert_eq!(InputDevice::Gamepad.look_multiplier(0.016), 0.016);
    }
}
