//! Scenewalk Game Logic
//!
//! This crate contains the per-tick simulation around the physics engine:
//!
//! - Gamepad input mapping
//! - Level geometry and the spawn point
//! - The player and its view outputs
//!
//! # Architecture
//!
//! All state updates are driven by one input per tick. Speeds are per tick,
//! so the same inputs always produce the same walk.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Game Simulation                       │
//! │  ┌─────────┐    ┌───────────────┐    ┌────────────────┐  │
//! │  │ Input   │───►│ Physics       │───►│ Player         │  │
//! │  │ (pad)   │    │ (walk, fall,  │    │ (position,     │  │
//! │  └─────────┘    │  collision)   │    │  view)         │  │
//! │                 └───────────────┘    └────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

// Re-export main types
pub use input::PlayerInput;
pub use level::Level;
pub use player::Player;
pub use simulation::{Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use scenewalk_physics::{
    CollisionWorld, EllipsoidSpace, MeshError, MovementConfig, MovementState, PlayerCommand,
    PlayerController,
};
