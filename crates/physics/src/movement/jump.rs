//! Jump state management.
//!
//! Jumps fire on the press edge of the button, and only after the player has
//! touched something on the way down since the last jump.

use serde::{Deserialize, Serialize};

/// Jump state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpState {
    /// Whether the player may jump (re-armed on landing).
    can_jump: bool,

    /// Previous tick's jump input (for edge detection).
    prev_jump_pressed: bool,
}

impl JumpState {
    /// Create a new jump state. The player cannot jump until first landing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update jump state for this tick.
    ///
    /// Returns whether a jump should be executed.
    pub fn update(&mut self, jump_pressed: bool) -> bool {
        let jump_just_pressed = jump_pressed && !self.prev_jump_pressed;
        self.prev_jump_pressed = jump_pressed;

        if self.can_jump && jump_just_pressed {
            self.can_jump = false;
            true
        } else {
            false
        }
    }

    /// Re-arm the jump after touching down.
    pub fn land(&mut self) {
        self.can_jump = true;
    }

    /// Check if a jump is currently allowed.
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }
}
