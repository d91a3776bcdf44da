//! Player input handling.
//!
//! This module converts raw gamepad state (analog sticks and digital
//! buttons) into commands for the physics system.

use scenewalk_physics::movement::PlayerCommand;
use serde::{Deserialize, Serialize};

/// Full analog deflection.
pub const AXIS_MAX: i16 = 32767;

/// Analog values closer to center than this are treated as zero.
pub const DEADZONE: i16 = 10000;

/// Deflection produced by a digital button.
const DIGITAL_WALK: i16 = 16384;

/// Deflection produced by a digital button while running.
const DIGITAL_RUN: i16 = AXIS_MAX;

/// Raw player input for a single frame.
///
/// This is the input format received from the host input system.
/// It gets converted to [`PlayerCommand`] for the physics system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Left stick (x, y). Walks and strafes; +y is pulled back.
    pub left_stick: (i16, i16),

    /// Right stick (x, y). Turns and looks; +x turns right, +y looks down.
    pub right_stick: (i16, i16),

    /// D-pad state.
    pub dpad: DpadInput,

    /// Action button states.
    pub actions: ActionInput,

    /// Frame number this input was generated.
    pub frame: u32,
}

/// D-pad and shoulder button states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpadInput {
    /// Walk forward, or look up while `look` is held.
    pub up: bool,
    /// Walk backward, or look down while `look` is held.
    pub down: bool,
    /// Turn left.
    pub left: bool,
    /// Turn right.
    pub right: bool,
    /// Strafe left (left shoulder).
    pub strafe_left: bool,
    /// Strafe right (right shoulder).
    pub strafe_right: bool,
}

/// Action button states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInput {
    pub jump: bool,
    /// Digital buttons give full deflection instead of half.
    pub run: bool,
    /// D-pad up/down look instead of walking.
    pub look: bool,
}

/// Stick values after digital overrides and the deadzone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Axes {
    pub lx: i16,
    pub ly: i16,
    pub rx: i16,
    pub ry: i16,
}

fn apply_deadzone(value: i16) -> i16 {
    if value.unsigned_abs() < DEADZONE as u16 {
        0
    } else {
        value
    }
}

fn normalize(value: i16) -> f32 {
    value as f32 / AXIS_MAX as f32
}

impl PlayerInput {
    /// Resolve the effective stick values for this frame.
    ///
    /// Digital buttons override the matching stick axis, then every axis
    /// goes through the deadzone.
    pub fn axes(&self) -> Axes {
        let (mut lx, mut ly) = self.left_stick;
        let (mut rx, mut ry) = self.right_stick;

        let amount = if self.actions.run { DIGITAL_RUN } else { DIGITAL_WALK };

        if self.dpad.left {
            rx = -amount;
        }
        if self.dpad.right {
            rx = amount;
        }

        if self.dpad.up {
            if self.actions.look {
                ry = -amount;
            } else {
                ly = -amount;
            }
        }
        if self.dpad.down {
            if self.actions.look {
                ry = amount;
            } else {
                ly = amount;
            }
        }

        if self.dpad.strafe_left {
            lx = -amount;
        }
        if self.dpad.strafe_right {
            lx = amount;
        }

        Axes {
            lx: apply_deadzone(lx),
            ly: apply_deadzone(ly),
            rx: apply_deadzone(rx),
            ry: apply_deadzone(ry),
        }
    }

    /// Convert to a physics command.
    ///
    /// Axes are normalized by full deflection, so a fully pushed stick maps
    /// to the controller's configured speeds.
    pub fn to_command(&self) -> PlayerCommand {
        let axes = self.axes();

        PlayerCommand {
            // Stick pulled back is positive
            forward_move: -normalize(axes.ly),
            right_move: normalize(axes.lx),
            // Pushing right turns right, which is negative yaw
            view_delta: (-normalize(axes.ry), -normalize(axes.rx)),
            jump: self.actions.jump,
        }
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        let axes = self.axes();
        axes.lx != 0 || axes.ly != 0
    }
}
