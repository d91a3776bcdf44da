//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning. Speeds are
//! per simulation tick, not per second: the controller runs once per frame
//! with no delta time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::EllipsoidSpace;

/// Configuration for player movement physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Player Dimensions
    // ========================================================================
    /// Collider radii (x, y, z) in world units.
    ///
    /// Used to build collision worlds via [`MovementConfig::ellipsoid_space`].
    /// Ticks always use the radii the world was built with.
    pub ellipsoid_radii: Vec3,

    // ========================================================================
    // Movement Speeds
    // ========================================================================
    /// Walking speed at full stick deflection (world units/tick).
    pub walk_speed: f32,

    /// Turn speed at full stick deflection (degrees/tick).
    pub yaw_speed: f32,

    /// Look up/down speed at full stick deflection (degrees/tick).
    pub pitch_speed: f32,

    /// Maximum pitch in either direction (degrees).
    pub pitch_limit: f32,

    // ========================================================================
    // Falling
    // ========================================================================
    /// Downward acceleration (ellipsoid units/tick²).
    pub gravity: f32,

    /// Fraction of vertical speed lost each tick.
    pub fall_damping: f32,

    /// Upward speed added by a jump (ellipsoid units/tick).
    pub jump_impulse: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            ellipsoid_radii: EllipsoidSpace::PLAYER.radii,

            // Full analog deflection is 32767
            walk_speed: 32767.0 * 0.000002,
            yaw_speed: 32767.0 * 0.00008,
            pitch_speed: 32767.0 * 0.00005,
            pitch_limit: 80.0,

            gravity: 0.01,
            fall_damping: 0.01,
            jump_impulse: 0.3,
        }
    }
}

impl MovementConfig {
    /// Faster walking and a higher jump.
    pub fn arcade() -> Self {
        Self {
            walk_speed: 0.12,
            yaw_speed: 4.0,
            jump_impulse: 0.4,
            ..Default::default()
        }
    }

    /// Floaty falling with the same walking speed.
    pub fn low_gravity() -> Self {
        Self {
            gravity: 0.004,
            fall_damping: 0.02,
            ..Default::default()
        }
    }

    /// Ellipsoid-space transform for this collider.
    pub fn ellipsoid_space(&self) -> EllipsoidSpace {
        EllipsoidSpace::new(self.ellipsoid_radii)
    }
}
