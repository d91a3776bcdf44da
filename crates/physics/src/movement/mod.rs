//! Player movement on top of the collision world.
//!
//! This module implements a simple first-person walker with:
//!
//! - Analog walking and turning at fixed per-tick speeds
//! - Gravity with damping and an edge-triggered jump
//! - Single-bounce slide response against walls, edges and corners
//! - A wall-hug pass that keeps the collider resting on surfaces
//!
//! # Design
//!
//! Movement is controlled by the [`PlayerController`] which takes input commands
//! and updates the player's [`MovementState`] through the collision world.
//! Horizontal walking and vertical falling are swept as two separate channels
//! each tick.
//!
//! All movement is deterministic - the same inputs will always produce the same
//! outputs.

mod config;
mod controller;
mod jump;
mod slide_move;
mod state;

pub use config::MovementConfig;
pub use controller::PlayerController;
pub use jump::JumpState;
pub use slide_move::{clip_velocity, resolve_collision, slide_move, wall_hug};
pub use state::{MovementFlags, MovementState, PlayerCommand};
