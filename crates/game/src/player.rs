//! Player entity and state.

use glam::{Mat4, Vec3};
use scenewalk_physics::MovementState;
use serde::{Deserialize, Serialize};

/// Unique identifier for entities.
pub type EntityId = u32;

/// The player walking through the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Player name/handle.
    pub name: String,

    /// Movement physics state.
    pub movement: MovementState,
}

impl Player {
    /// Create a new player at the given spawn position.
    pub fn new(id: EntityId, name: String, spawn_position: Vec3) -> Self {
        Self {
            id,
            name,
            movement: MovementState::new(spawn_position),
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.movement.position
    }

    /// Get the player's eye position (for camera).
    ///
    /// The camera sits at the collider center.
    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.movement.position
    }

    /// Get the direction the player is looking.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        self.movement.look_direction()
    }

    /// Get the player's forward direction (horizontal only).
    #[inline]
    pub fn forward_direction(&self) -> Vec3 {
        self.movement.forward_direction()
    }

    /// View matrix for a renderer: eye at the collider center, looking along
    /// the view direction, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        Mat4::look_at_rh(eye, eye + self.look_direction(), Vec3::Y)
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.movement.flags.on_ground()
    }

    /// Check if the player can jump right now.
    #[inline]
    pub fn can_jump(&self) -> bool {
        self.movement.jump.can_jump()
    }
}
