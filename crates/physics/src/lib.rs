//! Scenewalk Physics Engine
//!
//! Continuous collision for a first-person walker moving through a static
//! triangle mesh. The player's collider is an axis-aligned ellipsoid; every
//! query scales the world so that collider becomes a unit sphere.
//!
//! # Architecture
//!
//! The physics engine is split into two main systems:
//!
//! - **Collision**: Sweeps a unit sphere against triangles, returns the earliest impact
//! - **Movement**: Uses collision sweeps to implement walking, falling and jumping
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same inputs always produce same outputs
//! 2. **Simplicity**: One sweep per channel per tick, no iteration
//! 3. **Ownership**: The collision world and player state are plain values passed into each tick

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{CollisionWorld, Contact, EllipsoidSpace, Impact, MeshError, SelfTestError, Triangle};
pub use movement::{
    JumpState, MovementConfig, MovementFlags, MovementState, PlayerCommand, PlayerController,
};
