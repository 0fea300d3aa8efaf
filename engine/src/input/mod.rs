//! Input Module
//!
//! Platform-agnostic input handling for locomotion. Window-system events are
//! fed into [`InputState`], which produces one [`InputSnapshot`] per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfarer_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.pointer.set_captured(true);
//!
//! // Event loop
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.pointer.accumulate(12.0, -3.0);
//!
//! // Once per frame
//! let snapshot = input.snapshot();
//! ```

pub mod keyboard;
pub mod mouse_state;
pub mod snapshot;

pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::PointerLook;
pub use snapshot::{InputDevice, InputSnapshot};

/// Combined keyboard and pointer state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub pointer: PointerLook,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's snapshot, consuming the jump edge and pointer motion.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let movement = self.keyboard.movement;
        InputSnapshot {
            move_axis: movement.move_axis(),
            look: self.pointer.consume(),
            sprint: movement.sprint,
            jump: self.keyboard.take_jump(),
            analog_movement: false,
            device: InputDevice::Pointer,
        }
    }

    /// Reset all input state, e.g. on focus loss.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.pointer.set_captured(false);
    }
}
