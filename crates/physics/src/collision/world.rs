//! Collision world holding the static triangle registry.
//!
//! The world is built once per level load from a flat list of world-space
//! vertices (three per triangle) and is read-only while a tick runs. Reloading
//! a level replaces the whole registry.

use glam::Vec3;
use thiserror::Error;

use super::ellipsoid::EllipsoidSpace;
use super::impact::Impact;
use super::triangle::Triangle;

/// Contact planes closer than this behind the sphere center still count as hugged.
pub const HUG_TOLERANCE: f32 = 0.01;

/// Planes within this of one radius in front of the center count as already
/// resting, so a sphere that was just pushed out is not pushed again.
pub const HUG_SETTLE: f32 = 1e-4;

/// Errors raised while building a collision world from mesh data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("vertex count {vertex_count} is not a multiple of three")]
    IncompleteTriangle { vertex_count: usize },
}

/// Closest plane the sphere is resting against or sinking into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hug {
    /// Distance from the sphere center to the plane (`< 1.0` means overlap).
    pub distance: f32,
    /// Inward normal of the hugged triangle.
    pub normal: Vec3,
    /// Index of the hugged triangle.
    pub triangle: usize,
}

/// The collision world containing all static triangles.
#[derive(Debug, Default, Clone)]
pub struct CollisionWorld {
    /// Transform used to bring mesh vertices into ellipsoid space.
    space: EllipsoidSpace,
    /// Ellipsoid-space triangles.
    triangles: Vec<Triangle>,
}

impl CollisionWorld {
    /// Create an empty collision world for a collider of the given shape.
    pub fn new(space: EllipsoidSpace) -> Self {
        Self {
            space,
            triangles: Vec::new(),
        }
    }

    /// Build a world from world-space vertex triples.
    pub fn from_vertices(vertices: &[Vec3], space: EllipsoidSpace) -> Result<Self, MeshError> {
        let mut world = Self::new(space);
        world.rebuild(vertices)?;
        Ok(world)
    }

    /// Replace all triangles with the given world-space vertex triples.
    ///
    /// Zero-area triangles are skipped. On error the previous triangles are kept.
    pub fn rebuild(&mut self, vertices: &[Vec3]) -> Result<(), MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                vertex_count: vertices.len(),
            });
        }

        self.triangles.clear();
        self.add_vertices(vertices);

        log::info!(
            "collision world rebuilt: {} triangles from {} vertices",
            self.triangles.len(),
            vertices.len()
        );

        Ok(())
    }

    /// Append world-space vertex triples to the world.
    ///
    /// A trailing partial triangle is ignored. Returns the number of triangles added.
    pub fn add_vertices(&mut self, vertices: &[Vec3]) -> usize {
        let before = self.triangles.len();

        for (i, tri) in vertices.chunks_exact(3).enumerate() {
            match Triangle::from_world(tri[0], tri[1], tri[2], &self.space) {
                Some(triangle) => self.triangles.push(triangle),
                None => log::warn!("skipping degenerate triangle {} at {:?}", i, tri[0]),
            }
        }

        self.triangles.len() - before
    }

    /// Add a single world-space triangle. Returns `false` if it was degenerate.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> bool {
        match Triangle::from_world(a, b, c, &self.space) {
            Some(triangle) => {
                self.triangles.push(triangle);
                true
            }
            None => false,
        }
    }

    /// Remove all triangles.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get all triangles (ellipsoid space).
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Get the ellipsoid-space transform this world was built with.
    pub fn space(&self) -> &EllipsoidSpace {
        &self.space
    }

    /// Find the earliest impact of a unit sphere sweeping through the world.
    ///
    /// Both arguments are in ellipsoid space. Only impacts before the end of
    /// the sweep (`time < 1.0`) are reported.
    pub fn sweep(&self, position: Vec3, velocity: Vec3) -> Option<Impact> {
        let mut earliest: Option<Impact> = None;

        for (index, triangle) in self.triangles.iter().enumerate() {
            let limit = earliest.map_or(1.0, |impact| impact.time);
            if let Some(impact) = triangle.sweep(position, velocity, limit) {
                earliest = Some(impact.with_triangle(index));
            }
        }

        earliest
    }

    /// Find the nearest triangle the sphere is resting against or sinking into.
    ///
    /// A triangle qualifies when the sphere center is less than one radius
    /// (minus [`HUG_SETTLE`]) in front of its plane, no more than
    /// [`HUG_TOLERANCE`] behind it, and the center's projection onto the
    /// plane lies inside the triangle.
    pub fn closest_hug(&self, position: Vec3) -> Option<Hug> {
        let mut closest: Option<Hug> = None;

        for (index, triangle) in self.triangles.iter().enumerate() {
            let distance = triangle.plane_distance(position);
            let max_distance = closest.map_or(1.0 - HUG_SETTLE, |hug| hug.distance);

            if distance >= -HUG_TOLERANCE && distance < max_distance {
                let projected = position + triangle.normal * distance;
                if triangle.inside(projected) {
                    closest = Some(Hug {
                        distance,
                        normal: triangle.normal,
                        triangle: index,
                    });
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::impact::Contact;

    /// Two triangles forming a square floor at y = 0 (world), solid below.
    fn floor_vertices(half: f32) -> Vec<Vec3> {
        let a = Vec3::new(-half, 0.0, -half);
        let b = Vec3::new(-half, 0.0, half);
        let c = Vec3::new(half, 0.0, half);
        let d = Vec3::new(half, 0.0, -half);
        vec![a, b, c, a, c, d]
    }

    fn unit_world() -> CollisionWorld {
        CollisionWorld::new(EllipsoidSpace::new(Vec3::ONE))
    }

    #[test]
    fn test_from_vertices() {
        let world = CollisionWorld::from_vertices(&floor_vertices(10.0), EllipsoidSpace::PLAYER).unwrap();
        assert_eq!(world.triangle_count(), 2);
        for tri in world.triangles() {
            assert!((tri.normal - Vec3::NEG_Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_incomplete_triangle() {
        let mut vertices = floor_vertices(1.0);
        vertices.pop();
        let err = CollisionWorld::from_vertices(&vertices, EllipsoidSpace::PLAYER).unwrap_err();
        assert_eq!(err, MeshError::IncompleteTriangle { vertex_count: 5 });
    }

    #[test]
    fn test_rebuild_replaces() {
        let mut world = unit_world();
        world.rebuild(&floor_vertices(1.0)).unwrap();
        world.rebuild(&floor_vertices(2.0)[..3]).unwrap();
        assert_eq!(world.triangle_count(), 1);
    }

    #[test]
    fn test_degenerate_skipped() {
        let mut world = unit_world();
        let p = Vec3::new(1.0, 0.0, 0.0);
        let added = world.add_vertices(&[p, p, p, Vec3::ZERO, Vec3::Z, Vec3::X]);
        assert_eq!(added, 1);
        assert!(!world.add_triangle(p, p * 2.0, p * 3.0));
    }

    #[test]
    fn test_sweep_finds_floor() {
        let mut world = unit_world();
        world.add_vertices(&floor_vertices(10.0));

        let impact = world
            .sweep(Vec3::new(0.3, 2.0, 0.7), Vec3::new(0.0, -2.0, 0.0))
            .expect("should hit floor");
        assert!((impact.time - 0.5).abs() < 1e-5);
        assert_eq!(impact.contact, Contact::Face { normal: world.triangles()[impact.triangle].normal });
    }

    #[test]
    fn test_sweep_picks_earliest() {
        let mut world = unit_world();
        world.add_vertices(&floor_vertices(10.0));

        // Ceiling at y = 3, solid above
        let a = Vec3::new(-10.0, 3.0, -10.0);
        let b = Vec3::new(10.0, 3.0, -10.0);
        let c = Vec3::new(10.0, 3.0, 10.0);
        world.add_vertices(&[a, b, c]);

        // Moving up from y = 1.5: ceiling contact at y = 2 (t = 0.25)
        let impact = world
            .sweep(Vec3::new(2.0, 1.5, -1.0), Vec3::new(0.0, 2.0, 0.0))
            .expect("should hit ceiling");
        assert_eq!(impact.triangle, 2);
        assert!((impact.time - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_sweep_empty_world() {
        let world = unit_world();
        assert!(world.sweep(Vec3::ZERO, Vec3::X).is_none());
    }

    #[test]
    fn test_closest_hug() {
        let mut world = unit_world();
        world.add_vertices(&floor_vertices(10.0));

        let hug = world.closest_hug(Vec3::new(0.3, 0.9, 0.7)).expect("should hug floor");
        assert!((hug.distance - 0.9).abs() < 1e-5);
        assert_eq!(hug.normal, world.triangles()[hug.triangle].normal);

        assert!(world.closest_hug(Vec3::new(0.3, 1.0, 0.7)).is_none());
        assert!(world.closest_hug(Vec3::new(0.3, -0.5, 0.7)).is_none());
    }
}
