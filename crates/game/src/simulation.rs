//! Game simulation - the main game loop.
//!
//! This module contains the deterministic per-tick step: input in, player
//! movement through the level out. The simulation owns the level and the
//! player; nothing is shared between ticks except through it.

use glam::Vec3;
use scenewalk_physics::collision::self_test;
use scenewalk_physics::{MeshError, MovementConfig, PlayerController};
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::Player;

/// Game simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second). Movement speeds are per tick,
    /// so this only affects how long a run takes in wall time.
    pub tick_rate: u32,

    /// Movement physics configuration.
    pub movement: MovementConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            movement: MovementConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Default config with arcade movement.
    pub fn arcade() -> Self {
        Self {
            movement: MovementConfig::arcade(),
            ..Default::default()
        }
    }

    /// Default config with low gravity movement.
    pub fn low_gravity() -> Self {
        Self {
            movement: MovementConfig::low_gravity(),
            ..Default::default()
        }
    }

    /// Get the time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// The main game simulation.
///
/// This contains all game state and advances it deterministically based on
/// player input.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// The player.
    pub player: Player,

    /// Whether the collision self-test passed when the simulation started.
    pub self_test_passed: bool,

    /// Movement physics controller.
    movement_controller: PlayerController,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    ///
    /// Runs the collision self-test and spawns the player at the level's
    /// spawn point. A failed self-test is logged but does not stop the
    /// simulation.
    ///
    /// The collider shape comes from the level's collision world. If
    /// `config.movement.ellipsoid_radii` differs, a warning is logged and the
    /// level's radii are used.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let self_test_passed = match self_test::run() {
            Ok(()) => true,
            Err(err) => {
                log::error!("collision self-test failed: {}", err);
                false
            }
        };

        if level.collision.space().radii != config.movement.ellipsoid_radii {
            log::warn!(
                "level '{}' was built for radii {:?}, ignoring configured radii {:?}",
                level.id,
                level.collision.space().radii,
                config.movement.ellipsoid_radii
            );
        }

        let movement_controller = PlayerController::new(config.movement.clone());

        let mut player = Player::new(1, "player".to_string(), level.spawn_point);
        movement_controller.spawn_at(&mut player.movement, level.spawn_point, &level.collision);

        Self {
            frame: 0,
            config,
            level,
            player,
            self_test_passed,
            movement_controller,
        }
    }

    /// Create a simulation with default configuration and the test room.
    pub fn test() -> Self {
        let config = SimulationConfig::default();
        let level = Level::test_room(config.movement.ellipsoid_space());
        Self::new(config, level)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, input: &PlayerInput) {
        let command = input.to_command();

        self.movement_controller
            .update(&mut self.player.movement, &command, &self.level.collision);

        log::trace!(
            "frame {} pos={:?} fall={:?}",
            self.frame,
            self.player.position(),
            self.player.movement.fall_velocity
        );

        self.frame += 1;
    }

    /// Replace the level geometry.
    ///
    /// The player keeps its position and motion. On error the previous
    /// geometry is kept.
    pub fn reload_level(&mut self, vertices: &[Vec3]) -> Result<(), MeshError> {
        self.level.reload(vertices)?;
        log::info!(
            "reloaded level '{}' at frame {}",
            self.level.id,
            self.frame
        );
        Ok(())
    }

    /// Put the player back at the level's spawn point.
    pub fn respawn(&mut self) {
        self.movement_controller.spawn_at(
            &mut self.player.movement,
            self.level.spawn_point,
            &self.level.collision,
        );
    }

    /// Get the movement controller.
    pub fn controller(&self) -> &PlayerController {
        &self.movement_controller
    }
}

// ============================================================================
// Tests
// ============================================================================
