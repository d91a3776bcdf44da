//! Closed-form time-of-impact solvers for a moving unit sphere.
//!
//! Both solvers reduce to a quadratic `A t² + B t + C = 0` in the sweep time
//! `t`, where the sphere moves from `position` at `t = 0` to
//! `position + velocity` at `t = 1`. Roots are accepted down to
//! [`CONTACT_TOLERANCE`] so that a sphere already resting against a vertex
//! or edge still reports the contact.

use glam::Vec3;

/// Lowest root accepted as a contact time.
///
/// Slightly negative times absorb float slack for spheres that already touch
/// the feature at the start of the sweep.
pub const CONTACT_TOLERANCE: f32 = -0.5;

/// Leading coefficients at or below this are treated as "no relative motion".
///
/// Happens for zero velocity and for velocity parallel to an edge, where the
/// distance to the feature never changes over the sweep.
const DEGENERATE_SWEEP: f32 = 1e-12;

/// Pick the contact time from the roots of `a t² + b t + c = 0`.
///
/// Returns the smallest root that is at least [`CONTACT_TOLERANCE`], or
/// `None` if there are no real roots or neither qualifies.
fn earliest_root(a: f32, b: f32, c: f32) -> Option<f32> {
    if a <= DEGENERATE_SWEEP {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let far = (-b + sqrt_d) / (2.0 * a);
    let near = (-b - sqrt_d) / (2.0 * a);

    match (near >= CONTACT_TOLERANCE, far >= CONTACT_TOLERANCE) {
        (true, true) => Some(near.min(far)),
        (true, false) => Some(near),
        (false, true) => Some(far),
        (false, false) => None,
    }
}

/// Time at which a moving unit sphere first touches a stationary point.
///
/// # Arguments
///
/// * `position` - Sphere center at the start of the sweep
/// * `velocity` - Sphere motion over the whole sweep
/// * `point` - The stationary point (usually a triangle vertex)
pub fn point_impact(position: Vec3, velocity: Vec3, point: Vec3) -> Option<f32> {
    let offset = position - point;

    let a = velocity.dot(velocity);
    let b = 2.0 * offset.dot(velocity);
    let c = offset.dot(offset) - 1.0;

    earliest_root(a, b, c)
}

/// Time and place at which a moving unit sphere first touches a segment.
///
/// The sphere is tested against the infinite line through `start` and `end`
/// with the along-line components projected out. The hit only counts if the
/// contact lies on the segment itself.
///
/// Returns `(time, contact_point)`.
pub fn edge_impact(position: Vec3, velocity: Vec3, start: Vec3, end: Vec3) -> Option<(f32, Vec3)> {
    let edge = end - start;
    let offset = position - start;

    let edge_sq = edge.dot(edge);
    if edge_sq <= DEGENERATE_SWEEP {
        return None;
    }

    // Strip the along-edge components of motion and offset.
    let velocity_perp = velocity - edge * (edge.dot(velocity) / edge_sq);
    let offset_perp = offset - edge * (edge.dot(offset) / edge_sq);

    let a = velocity_perp.dot(velocity_perp);
    let b = 2.0 * velocity_perp.dot(offset_perp);
    let c = offset_perp.dot(offset_perp) - 1.0;

    let time = earliest_root(a, b, c)?;

    let along = edge.dot(offset + velocity * time) / edge_sq;
    if (0.0..=1.0).contains(&along) {
        Some((time, start + edge * along))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn grazing_time() -> f32 {
        1.0 - (30.0_f32).to_radians().cos()
    }

    #[test]
    fn test_point_head_on() {
        let t = point_impact(Vec3::ZERO, Vec3::X, Vec3::new(3.0, 0.0, 0.0));
        assert!(close(t.unwrap(), 2.0), "got {:?}", t);
    }

    #[test]
    fn test_point_out_of_reach() {
        let t = point_impact(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 2.0, 0.0));
        assert!(t.is_none());
    }

    #[test]
    fn test_point_grazing() {
        let t = point_impact(Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.5, 0.0)).unwrap();
        assert!(close(t, grazing_time()), "got {}", t);

        let t = point_impact(Vec3::ZERO, Vec3::Y, Vec3::new(0.5, 1.0, 0.0)).unwrap();
        assert!(close(t, grazing_time()), "got {}", t);
    }

    #[test]
    fn test_point_behind_is_rejected() {
        // Both roots are far in the past
        let t = point_impact(Vec3::ZERO, Vec3::X, Vec3::new(-5.0, 0.0, 0.0));
        assert!(t.is_none());
    }

    #[test]
    fn test_point_already_touching() {
        // Sphere starts overlapping the point; the entry root is slightly negative
        let t = point_impact(Vec3::ZERO, Vec3::X, Vec3::new(0.9, 0.0, 0.0)).unwrap();
        assert!(t < 0.0 && t >= CONTACT_TOLERANCE, "got {}", t);
    }

    #[test]
    fn test_point_zero_velocity() {
        assert!(point_impact(Vec3::ZERO, Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_edge_perpendicular_hit() {
        let (t, contact) = edge_impact(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(4.0, -1.0, 0.0),
            Vec3::new(4.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(close(t, 3.0), "got {}", t);
        assert!((contact - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_edge_contact_off_segment() {
        // Line is hit but the contact lies beyond the segment's end
        let hit = edge_impact(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(4.0, 1.0, 0.0),
            Vec3::new(4.0, 3.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_edge_parallel_motion() {
        // Sliding along the edge never changes the distance to the line
        let hit = edge_impact(
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::X,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_edge_zero_length() {
        let p = Vec3::new(2.0, 0.0, 0.0);
        assert!(edge_impact(Vec3::ZERO, Vec3::X, p, p).is_none());
    }
}
