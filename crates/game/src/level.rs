//! Level loading and management.

use glam::Vec3;
use scenewalk_physics::{CollisionWorld, EllipsoidSpace, MeshError};

/// Default player spawn point (world space).
pub const DEFAULT_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// A game level containing collision geometry and a spawn point.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Collision world for physics.
    pub collision: CollisionWorld,

    /// Player spawn point (world space).
    pub spawn_point: Vec3,
}

/// Triangle vertices for an axis-aligned box.
///
/// Returns 12 triangles (36 vertices) wound so that each face's
/// counter-clockwise normal points out of the box, which makes the collision
/// normal point into it.
pub fn box_vertices(center: Vec3, half_extents: Vec3) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(36);

    for axis in 0..3 {
        let u = Vec3::AXES[(axis + 1) % 3] * half_extents[(axis + 1) % 3];
        let v = Vec3::AXES[(axis + 2) % 3] * half_extents[(axis + 2) % 3];

        for sign in [-1.0_f32, 1.0] {
            let face = center + Vec3::AXES[axis] * (half_extents[axis] * sign);

            let p0 = face - u - v;
            let p1 = face + u - v;
            let p2 = face + u + v;
            let p3 = face - u + v;

            // u x v points along +axis
            if sign > 0.0 {
                vertices.extend_from_slice(&[p0, p1, p2, p0, p2, p3]);
            } else {
                vertices.extend_from_slice(&[p0, p2, p1, p0, p3, p2]);
            }
        }
    }

    vertices
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str, space: EllipsoidSpace) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            collision: CollisionWorld::new(space),
            spawn_point: DEFAULT_SPAWN,
        }
    }

    /// Create a level from world-space vertex triples.
    pub fn from_vertices(
        id: &str,
        name: &str,
        vertices: &[Vec3],
        space: EllipsoidSpace,
    ) -> Result<Self, MeshError> {
        let mut level = Self::new(id, name, space);
        level.collision.rebuild(vertices)?;
        Ok(level)
    }

    /// Create a walled room with a pillar for development.
    pub fn test_room(space: EllipsoidSpace) -> Self {
        let mut level = Self::new("test_room", "Test Room", space);

        // Floor, top surface at y = 0
        level.add_box(Vec3::new(0.0, -0.5, 0.0), Vec3::new(10.0, 0.5, 10.0));

        // Walls, inner faces at +/-10
        let wall_height = 4.0;
        let wall_thickness = 0.5;
        let room_size = 10.0;

        // North wall
        level.add_box(
            Vec3::new(0.0, wall_height / 2.0, -room_size - wall_thickness),
            Vec3::new(room_size + 1.0, wall_height / 2.0, wall_thickness),
        );

        // South wall
        level.add_box(
            Vec3::new(0.0, wall_height / 2.0, room_size + wall_thickness),
            Vec3::new(room_size + 1.0, wall_height / 2.0, wall_thickness),
        );

        // East wall
        level.add_box(
            Vec3::new(room_size + wall_thickness, wall_height / 2.0, 0.0),
            Vec3::new(wall_thickness, wall_height / 2.0, room_size + 1.0),
        );

        // West wall
        level.add_box(
            Vec3::new(-room_size - wall_thickness, wall_height / 2.0, 0.0),
            Vec3::new(wall_thickness, wall_height / 2.0, room_size + 1.0),
        );

        // Pillar
        level.add_box(Vec3::new(-5.0, 1.0, -5.0), Vec3::new(1.0, 1.0, 1.0));

        log::info!(
            "built level '{}' with {} triangles",
            level.id,
            level.collision.triangle_count()
        );

        level
    }

    /// Add an axis-aligned box to the collision world.
    ///
    /// Returns the number of triangles added.
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3) -> usize {
        self.collision.add_vertices(&box_vertices(center, half_extents))
    }

    /// Replace the level geometry with new world-space vertex triples.
    ///
    /// On error the previous geometry is kept.
    pub fn reload(&mut self, vertices: &[Vec3]) -> Result<(), MeshError> {
        self.collision.rebuild(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_creation() {
        let level = Level::new("test", "Test Level", EllipsoidSpace::PLAYER);
        assert_eq!(level.id, "test");
        assert_eq!(level.collision.triangle_count(), 0);
        assert_eq!(level.spawn_point, DEFAULT_SPAWN);
    }

    #[test]
    fn test_box_normals_point_inward() {
        let center = Vec3::new(1.0, 2.0, -3.0);
        let world = CollisionWorld::from_vertices(
            &box_vertices(center, Vec3::new(1.0, 0.5, 2.0)),
            EllipsoidSpace::new(Vec3::ONE),
        )
        .unwrap();
        assert_eq!(world.triangle_count(), 12);

        for tri in world.triangles() {
            let face_center = (tri.a + tri.b + tri.c) / 3.0;
            // Moving along the normal from the face heads into the box
            assert!(
                tri.normal.dot(center - face_center) > 0.0,
                "normal {:?} points away from the box",
                tri.normal
            );
        }
    }

    #[test]
    fn test_test_room() {
        let level = Level::test_room(EllipsoidSpace::PLAYER);
        assert_eq!(level.collision.triangle_count(), 6 * 12);

        // Spawn is above the floor and clear of everything
        let space = level.collision.space();
        assert!(level.collision.closest_hug(space.to_ellipsoid(level.spawn_point)).is_none());
    }

    #[test]
    fn test_from_vertices_and_reload() {
        let vertices = box_vertices(Vec3::ZERO, Vec3::ONE);
        let mut level = Level::from_vertices("crate", "Crate", &vertices, EllipsoidSpace::PLAYER).unwrap();
        assert_eq!(level.collision.triangle_count(), 12);

        level.reload(&vertices[..6]).unwrap();
        assert_eq!(level.collision.triangle_count(), 2);

        let err = level.reload(&vertices[..4]).unwrap_err();
        assert_eq!(err, MeshError::IncompleteTriangle { vertex_count: 4 });
        assert_eq!(level.collision.triangle_count(), 2);
    }
}
