//! Movement state and input structures.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::jump::JumpState;

/// Flags describing the player's current movement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFlags(pub u16);

impl MovementFlags {
    /// The fall channel touched something this tick.
    pub const ON_GROUND: u16 = 1 << 0;

    /// Player is jumping (left the ground via jump and has not touched down).
    pub const JUMPING: u16 = 1 << 1;

    /// The walk channel was stopped or deflected this tick.
    pub const BLOCKED: u16 = 1 << 2;

    /// Check if a flag is set.
    #[inline]
    pub fn has(self, flag: u16) -> bool {
        (self.0 & flag) != 0
    }

    /// Set or clear a flag.
    #[inline]
    pub fn set(&mut self, flag: u16, value: bool) {
        if value {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Check if player is on the ground.
    #[inline]
    pub fn on_ground(self) -> bool {
        self.has(Self::ON_GROUND)
    }

    /// Check if player is jumping.
    #[inline]
    pub fn jumping(self) -> bool {
        self.has(Self::JUMPING)
    }

    /// Check if the player walked into something.
    #[inline]
    pub fn blocked(self) -> bool {
        self.has(Self::BLOCKED)
    }
}

/// Complete movement state for a player.
///
/// Owned by the simulation and passed into each tick; nothing here is global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementState {
    /// Collider center in world space.
    pub position: Vec3,

    /// View angles in degrees: (pitch, yaw, roll).
    ///
    /// - Pitch: looking up/down, clamped to the configured limit
    /// - Yaw: turning left/right, kept in [-180, 180)
    /// - Roll: unused
    pub view_angles: Vec3,

    /// Vertical motion carried between ticks, in ellipsoid space.
    pub fall_velocity: Vec3,

    /// Movement state flags.
    pub flags: MovementFlags,

    /// Jump edge detection and re-arming.
    pub jump: JumpState,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            view_angles: Vec3::ZERO,
            fall_velocity: Vec3::ZERO,
            flags: MovementFlags::default(),
            jump: JumpState::default(),
        }
    }
}

impl MovementState {
    /// Create a new movement state at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.view_angles.y.to_radians())
    }

    /// Get the forward walking direction (horizontal only).
    ///
    /// Yaw 0 faces -Z.
    pub fn forward_direction(&self) -> Vec3 {
        self.yaw_rotation() * Vec3::NEG_Z
    }

    /// Get the right strafing direction (horizontal only).
    pub fn right_direction(&self) -> Vec3 {
        Quat::from_rotation_y((self.view_angles.y - 90.0).to_radians()) * Vec3::NEG_Z
    }

    /// Get the full view direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        self.yaw_rotation() * Quat::from_rotation_x(self.view_angles.x.to_radians()) * Vec3::NEG_Z
    }
}

/// Input command from the player for a single tick.
///
/// Axes are normalized to [-1, 1] by the input layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    /// Forward/backward movement. Positive = forward.
    pub forward_move: f32,

    /// Strafe left/right. Positive = right.
    pub right_move: f32,

    /// View rotation this tick: (pitch, yaw). Positive pitch looks up,
    /// positive yaw turns left.
    pub view_delta: (f32, f32),

    /// Jump button held.
    pub jump: bool,
}

impl PlayerCommand {
    /// Check if jump is held.
    #[inline]
    pub fn wants_jump(&self) -> bool {
        self.jump
    }

    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement_input(&self) -> bool {
        self.forward_move != 0.0 || self.right_move != 0.0
    }
}
