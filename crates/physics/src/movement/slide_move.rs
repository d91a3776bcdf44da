//! Slide response for collision resolution.
//!
//! Each call sweeps once and applies a single bounce: the sphere is moved to
//! the earliest contact, the velocity loses its component along the contact
//! normal, and what remains is scaled down to the unused part of the tick.
//! Leftover velocity is not swept again in the same tick, so sliding into a
//! corner can leave the sphere short of where an iterative solver would.

use glam::Vec3;

use crate::collision::{CollisionWorld, Contact, Hug, Impact};

/// Normals shorter than this (squared) are too small to project against.
const MIN_NORMAL_LENGTH_SQ: f32 = 1e-12;

/// Clip velocity against a surface normal.
///
/// Removes the component of velocity along `normal`. The normal does not have
/// to be unit length. A zero-length normal leaves the velocity unchanged.
pub fn clip_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    let length_sq = normal.length_squared();
    if length_sq <= MIN_NORMAL_LENGTH_SQ {
        return velocity;
    }

    velocity - normal * (velocity.dot(normal) / length_sq)
}

/// Sweep the sphere once and apply the slide response to the earliest impact.
///
/// Both `position` and `velocity` are in ellipsoid space. With no impact
/// before the end of the tick nothing is changed and the caller advances by
/// the full velocity. Otherwise `position` is moved to the contact and
/// `velocity` becomes the remaining slide motion for this tick.
///
/// Returns the impact that was resolved, if any.
pub fn resolve_collision(
    world: &CollisionWorld,
    position: &mut Vec3,
    velocity: &mut Vec3,
) -> Option<Impact> {
    if *velocity == Vec3::ZERO {
        return None;
    }

    let impact = world.sweep(*position, *velocity)?;

    *position += *velocity * impact.time;

    let normal = match impact.contact {
        Contact::Face { normal } => normal,
        Contact::Edge { point } => point - *position,
    };

    *velocity = clip_velocity(*velocity, normal) * (1.0 - impact.time);

    log::trace!(
        "resolved impact t={:.4} tri={} face={} vel={:?}",
        impact.time,
        impact.triangle,
        impact.is_face(),
        velocity
    );

    Some(impact)
}

/// Push the sphere out of the nearest surface it is resting against or sinking into.
///
/// After the correction the sphere center sits one radius from the hugged
/// plane, up to float rounding. Anything within [`HUG_SETTLE`] of one radius
/// is left alone, so running it twice in a row leaves the position unchanged
/// the second time.
///
/// [`HUG_SETTLE`]: crate::collision::HUG_SETTLE
pub fn wall_hug(world: &CollisionWorld, position: &mut Vec3) -> Option<Hug> {
    let hug = world.closest_hug(*position)?;

    *position += hug.normal * (hug.distance - 1.0);

    log::debug!(
        "wall hug: tri={} dist={:.6} pos={:?}",
        hug.triangle,
        hug.distance,
        position
    );

    Some(hug)
}

/// Resolve, advance by the remaining velocity, then hug.
///
/// This is one full channel step. Returns the impact resolved on the way.
pub fn slide_move(world: &CollisionWorld, position: &mut Vec3, velocity: &mut Vec3) -> Option<Impact> {
    let impact = resolve_collision(world, position, velocity);
    *position += *velocity;
    wall_hug(world, position);
    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::EllipsoidSpace;

    /// Square floor at y = 0, solid below, in a unit-radius world.
    fn floor_world(half: f32) -> CollisionWorld {
        let a = Vec3::new(-half, 0.0, -half);
        let b = Vec3::new(-half, 0.0, half);
        let c = Vec3::new(half, 0.0, half);
        let d = Vec3::new(half, 0.0, -half);
        CollisionWorld::from_vertices(&[a, b, c, a, c, d], EllipsoidSpace::new(Vec3::ONE)).unwrap()
    }

    #[test]
    fn test_clip_velocity() {
        let clipped = clip_velocity(Vec3::new(1.0, -2.0, 0.0), Vec3::NEG_Y);
        assert!((clipped - Vec3::X).length() < 1e-6);

        // Non-unit normals project the same way
        let clipped = clip_velocity(Vec3::new(1.0, -2.0, 0.0), Vec3::new(0.0, -4.0, 0.0));
        assert!((clipped - Vec3::X).length() < 1e-6);

        // Zero normal is a no-op
        let v = Vec3::new(0.3, 0.1, -0.2);
        assert_eq!(clip_velocity(v, Vec3::ZERO), v);
    }

    #[test]
    fn test_resolve_zero_velocity() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(0.0, 1.0, 0.0);
        let mut vel = Vec3::ZERO;

        assert!(resolve_collision(&world, &mut pos, &mut vel).is_none());
        assert_eq!(pos, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(vel, Vec3::ZERO);
    }

    #[test]
    fn test_resolve_free_motion() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(0.0, 3.0, 0.0);
        let mut vel = Vec3::new(0.5, -0.5, 0.0);

        assert!(resolve_collision(&world, &mut pos, &mut vel).is_none());
        assert_eq!(pos, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(vel, Vec3::new(0.5, -0.5, 0.0));
    }

    #[test]
    fn test_resolve_face_slides() {
        let world = floor_world(10.0);
        let start = Vec3::new(0.3, 2.0, 0.7);
        let initial_velocity = Vec3::new(1.0, -2.0, 0.0);
        let mut pos = start;
        let mut vel = initial_velocity;

        let impact = resolve_collision(&world, &mut pos, &mut vel).expect("should hit floor");
        assert!(impact.is_face());
        assert!((impact.time - 0.5).abs() < 1e-5);

        assert!((pos - Vec3::new(0.8, 1.0, 0.7)).length() < 1e-5, "pos = {:?}", pos);
        assert!((vel - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5, "vel = {:?}", vel);

        // Never advances past the full tick
        assert!((pos - start).length() <= initial_velocity.length());
    }

    #[test]
    fn test_resolve_edge_response() {
        // Triangle on y = 0 covering x >= 0, z >= 0, x + z <= 4
        let world = CollisionWorld::from_vertices(
            &[Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), Vec3::new(4.0, 0.0, 0.0)],
            EllipsoidSpace::new(Vec3::ONE),
        )
        .unwrap();

        // Beside the triangle, drifting down and toward the x = 0 edge
        let start = Vec3::new(-1.5, 0.5, 1.0);
        let initial_velocity = Vec3::new(1.0, -0.1, 0.0);
        let mut pos = start;
        let mut vel = initial_velocity;

        let impact = resolve_collision(&world, &mut pos, &mut vel).expect("should hit edge");
        let point = match impact.contact {
            Contact::Edge { point } => point,
            other => panic!("expected edge contact, got {:?}", other),
        };
        assert!((point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4, "point = {:?}", point);
        assert!(impact.time > 0.55 && impact.time < 0.65, "time = {}", impact.time);

        // Velocity no longer pushes toward the contact
        let normal = point - pos;
        assert!(vel.dot(normal).abs() < 1e-4, "vel = {:?}", vel);
        assert!((pos - start).length() <= initial_velocity.length());
    }

    #[test]
    fn test_wall_hug_pushes_out() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(1.0, 0.9, -2.0);

        let hug = wall_hug(&world, &mut pos).expect("should hug floor");
        assert!((hug.distance - 0.9).abs() < 1e-5);
        assert!((pos - Vec3::new(1.0, 1.0, -2.0)).length() < 1e-5, "pos = {:?}", pos);
    }

    #[test]
    fn test_wall_hug_idempotent() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(-3.0, 0.95, 4.0);

        wall_hug(&world, &mut pos);
        let after_first = pos;

        assert!(wall_hug(&world, &mut pos).is_none());
        assert_eq!(pos, after_first);
    }

    #[test]
    fn test_wall_hug_idempotent_on_tilted_plane() {
        // Sloped, skewed triangle in the player's ellipsoid space
        let world = CollisionWorld::from_vertices(
            &[
                Vec3::new(-7.3, 0.4, -6.1),
                Vec3::new(-5.2, 3.9, 8.7),
                Vec3::new(9.1, 1.3, -2.6),
            ],
            EllipsoidSpace::PLAYER,
        )
        .unwrap();
        let tri = world.triangles()[0];

        let mut checked = 0;
        for i in 1..10 {
            for j in 1..10 {
                let u = i as f32 * 0.05;
                let v = j as f32 * 0.05;
                let on_plane = tri.a + (tri.b - tri.a) * u + (tri.c - tri.a) * v;

                for k in 0..25 {
                    let depth = 0.5 + k as f32 * 0.019;
                    let mut pos = on_plane - tri.normal * depth;

                    assert!(wall_hug(&world, &mut pos).is_some(), "depth {} should hug", depth);
                    let after_first = pos;

                    assert!(
                        wall_hug(&world, &mut pos).is_none(),
                        "second hug fired at {:?} (distance {})",
                        after_first,
                        tri.plane_distance(after_first)
                    );
                    assert_eq!(pos, after_first);
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 9 * 9 * 25);
    }

    #[test]
    fn test_wall_hug_ignores_deep_penetration() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(0.0, -0.5, 0.0);

        assert!(wall_hug(&world, &mut pos).is_none());
        assert_eq!(pos, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_slide_move_lands_on_floor() {
        let world = floor_world(10.0);
        let mut pos = Vec3::new(0.0, 1.5, 0.0);
        let mut vel = Vec3::new(0.2, -1.0, 0.0);

        assert!(slide_move(&world, &mut pos, &mut vel).is_some());
        assert!((pos.y - 1.0).abs() < 1e-5, "pos = {:?}", pos);
        assert!(vel.y.abs() < 1e-6);
        assert!(pos.x > 0.0);
    }
}
