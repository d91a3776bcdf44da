//! Player movement controller.
//!
//! This is the main entry point for player movement. It takes input commands
//! and updates the movement state through the collision world.

use glam::Vec3;

use crate::collision::CollisionWorld;

use super::config::MovementConfig;
use super::slide_move::{resolve_collision, slide_move, wall_hug};
use super::state::{MovementFlags, MovementState, PlayerCommand};

/// Player movement controller.
///
/// Each tick moves the player through two independent one-shot sweeps:
/// - Walking: horizontal motion from the sticks, resolved then hugged
/// - Falling: the vertical channel carried between ticks, with jumping
///
/// # Example
///
/// ```ignore
/// let controller = PlayerController::new(MovementConfig::default());
/// let mut state = MovementState::default();
/// controller.spawn_at(&mut state, spawn_position, &world);
///
/// // Each tick:
/// controller.update(&mut state, &command, &world);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Movement configuration.
    pub config: MovementConfig,
}

impl PlayerController {
    /// Create a new player controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Reset a player's state and place it at the spawn point.
    ///
    /// If the spawn point overlaps a surface slightly, the player is pushed
    /// out to rest on it. The player cannot jump until first landing.
    pub fn spawn_at(&self, state: &mut MovementState, spawn_pos: Vec3, world: &CollisionWorld) {
        let space = world.space();
        let mut position = space.to_ellipsoid(spawn_pos);
        wall_hug(world, &mut position);

        *state = MovementState::new(space.to_world(position));

        log::info!("spawned at {:?} (requested {:?})", state.position, spawn_pos);
    }

    /// Update player movement for one tick.
    ///
    /// Speeds in the config are per tick; there is no delta time. Positions
    /// are scaled by the world's own [`EllipsoidSpace`](crate::collision::EllipsoidSpace),
    /// not by `config.ellipsoid_radii`, so the collider always matches the
    /// radii the triangles were built for.
    pub fn update(&self, state: &mut MovementState, command: &PlayerCommand, world: &CollisionWorld) {
        self.update_view_angles(state, command);

        let space = world.space();
        let mut position = space.to_ellipsoid(state.position);

        self.walk_move(state, command, world, &mut position);
        self.fall_move(state, command, world, &mut position);

        state.position = space.to_world(position);
    }

    // ========================================================================
    // View Angles
    // ========================================================================

    fn update_view_angles(&self, state: &mut MovementState, command: &PlayerCommand) {
        let (pitch_delta, yaw_delta) = command.view_delta;

        state.view_angles.x += pitch_delta * self.config.pitch_speed;
        state.view_angles.y += yaw_delta * self.config.yaw_speed;

        let limit = self.config.pitch_limit;
        state.view_angles.x = state.view_angles.x.clamp(-limit, limit);

        // Keep yaw in [-180, 180)
        state.view_angles.y = (state.view_angles.y + 180.0).rem_euclid(360.0) - 180.0;
    }

    // ========================================================================
    // Walking
    // ========================================================================

    /// Desired walking velocity in world space.
    fn walk_velocity(&self, state: &MovementState, command: &PlayerCommand) -> Vec3 {
        let speed = self.config.walk_speed;
        state.forward_direction() * (command.forward_move * speed)
            + state.right_direction() * (command.right_move * speed)
    }

    fn walk_move(
        &self,
        state: &mut MovementState,
        command: &PlayerCommand,
        world: &CollisionWorld,
        position: &mut Vec3,
    ) {
        let mut velocity = world.space().to_ellipsoid(self.walk_velocity(state, command));

        let impact = slide_move(world, position, &mut velocity);
        state.flags.set(MovementFlags::BLOCKED, impact.is_some());
    }

    // ========================================================================
    // Falling and Jumping
    // ========================================================================

    fn fall_move(
        &self,
        state: &mut MovementState,
        command: &PlayerCommand,
        world: &CollisionWorld,
        position: &mut Vec3,
    ) {
        let mut fall = state.fall_velocity;

        fall.y -= self.config.gravity;

        if state.jump.update(command.wants_jump()) {
            fall.y += self.config.jump_impulse;
            state.flags.set(MovementFlags::JUMPING, true);
            log::debug!("jump at {:?}", position);
        }

        fall.y -= fall.y * self.config.fall_damping;

        // Any change to the vertical speed means the sweep touched something.
        let before = fall.y;
        resolve_collision(world, position, &mut fall);
        let landed = fall.y != before;

        if landed {
            fall = Vec3::ZERO;
            state.jump.land();
            state.flags.set(MovementFlags::JUMPING, false);
        }
        state.flags.set(MovementFlags::ON_GROUND, landed);

        *position += fall;
        wall_hug(world, position);

        state.fall_velocity = fall;
    }
}
