//! Ellipsoid-space transform.
//!
//! The player collider is an axis-aligned ellipsoid. Dividing world coordinates
//! component-wise by its radii turns it into a unit sphere, which is what every
//! solver in this crate assumes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Component-wise scaling between world space and ellipsoid space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidSpace {
    /// Ellipsoid radii in world units (x, y, z).
    pub radii: Vec3,
}

impl EllipsoidSpace {
    /// Default player collider: 0.4 wide, 0.8 tall (half-extents).
    pub const PLAYER: Self = Self {
        radii: Vec3::new(0.4, 0.8, 0.4),
    };

    /// Create a transform for the given radii.
    pub fn new(radii: Vec3) -> Self {
        Self { radii }
    }

    /// Convert a world-space point or vector into ellipsoid space.
    #[inline]
    pub fn to_ellipsoid(&self, world: Vec3) -> Vec3 {
        world / self.radii
    }

    /// Convert an ellipsoid-space point or vector back into world space.
    #[inline]
    pub fn to_world(&self, ellipsoid: Vec3) -> Vec3 {
        ellipsoid * self.radii
    }
}

impl Default for EllipsoidSpace {
    fn default() -> Self {
        Self::PLAYER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_radii_scale() {
        let space = EllipsoidSpace::default();
        let e = space.to_ellipsoid(Vec3::new(0.4, 0.8, -0.4));
        assert!((e - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_world_ellipsoid_inverse() {
        let space = EllipsoidSpace::new(Vec3::new(0.5, 2.0, 0.25));
        let p = Vec3::new(3.0, -1.5, 7.25);
        let back = space.to_world(space.to_ellipsoid(p));
        assert!((back - p).length() < 1e-5);
    }
}
