//! Keyboard Input Module
//!
//! Tracks the keys that drive locomotion and turns them into movement axes,
//! a held sprint flag and an edge-triggered jump.
//! Decoupled from any windowing system; callers translate their key events
//! into [`KeyCode`].

use glam::Vec2;

/// Generic key codes for locomotion input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,

    /// Catch-all for keys locomotion does not use
    Unknown,
}

/// Tracks the current state of movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp
    pub forward: bool,
    /// S / ArrowDown
    pub backward: bool,
    /// A / ArrowLeft
    pub left: bool,
    /// D / ArrowRight
    pub right: bool,
    /// Space held
    pub jump: bool,
    /// Shift held
    pub sprint: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let slot = match key {
            KeyCode::W | KeyCode::ArrowUp => &mut self.forward,
            KeyCode::S | KeyCode::ArrowDown => &mut self.backward,
            KeyCode::A | KeyCode::ArrowLeft => &mut self.left,
            KeyCode::D | KeyCode::ArrowRight => &mut self.right,
            KeyCode::Space => &mut self.jump,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => &mut self.sprint,
            KeyCode::Unknown => return false,
        };
        *slot = pressed;
        true
    }

    /// Forward/backward direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Digital movement axes, x = right, y = forward.
    pub fn move_axis(&self) -> Vec2 {
        Vec2::new(self.right_axis() as f32, self.forward_axis() as f32)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Keyboard state with jump edge detection.
///
/// A jump press is latched on the released→pressed transition only, so key
/// auto-repeat and a held key never produce a second jump request.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub movement: MovementKeys,
    jump_pressed: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Space && pressed && !self.movement.jump {
            self.jump_pressed = true;
        }
        self.movement.handle_key(key, pressed)
    }

    /// Take the latched jump press.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }

    /// Release everything, e.g. on focus loss.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert_eq!(keys.move_axis(), Vec2::ZERO);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.move_axis(), Vec2::new(1.0, 0.0));

        keys.handle_key(KeyCode::S, false);
        assert_eq!(keys.move_axis(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowLeft, true);
        assert_eq!(keys.right_axis(), -1);
    }

    #[test]
    fn test_unknown_key_not_handled() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Unknown, true));
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::Space, true);
        // Auto-repeat press while held
        kb.handle_key(KeyCode::Space, true);
        assert!(kb.take_jump());
        assert!(!kb.take_jump());

        kb.handle_key(KeyCode::Space, false);
        kb.handle_key(KeyCode::Space, true);
        assert!(kb.take_jump());
    }

    #[test]
    fn test_sprint_held() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::ShiftRight, true);
        assert!(kb.movement.sprint);
        kb.handle_key(KeyCode::ShiftRight, false);
        assert!(!kb.movement.sprint);
    }
}
