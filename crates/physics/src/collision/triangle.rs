//! Ellipsoid-space collision triangles.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ellipsoid::EllipsoidSpace;
use super::impact::Impact;
use super::solver::{edge_impact, point_impact};

/// Closing speeds at or below this are treated as moving parallel to a plane.
pub const MIN_APPROACH_SPEED: f32 = 1e-5;

/// A static triangle in ellipsoid space.
///
/// The normal points *into* the solid the player cannot enter, which is the
/// negation of the usual counter-clockwise face normal. With that convention
/// [`Triangle::plane_distance`] is positive in front of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,

    /// Inward unit normal.
    pub normal: Vec3,

    /// Plane constant: `normal.dot(p) == plane_offset` for every point `p` on the plane.
    pub plane_offset: f32,
}

impl Triangle {
    /// Build a triangle from ellipsoid-space vertices.
    ///
    /// Returns `None` for zero-area triangles, which have no usable normal.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = -(b - a).cross(c - a).try_normalize()?;

        Some(Self {
            a,
            b,
            c,
            normal,
            plane_offset: normal.dot(a),
        })
    }

    /// Build a triangle from world-space vertices.
    pub fn from_world(a: Vec3, b: Vec3, c: Vec3, space: &EllipsoidSpace) -> Option<Self> {
        Self::new(
            space.to_ellipsoid(a),
            space.to_ellipsoid(b),
            space.to_ellipsoid(c),
        )
    }

    /// Signed distance from `point` to the plane along the inward normal.
    ///
    /// Positive when the point is in front of the surface (outside the solid).
    #[inline]
    pub fn plane_distance(&self, point: Vec3) -> f32 {
        self.plane_offset - point.dot(self.normal)
    }

    /// Check whether a point on (or near) the plane lies within the triangle.
    ///
    /// Same-side test against each edge using the outward normal. Points on
    /// an edge count as inside.
    pub fn inside(&self, point: Vec3) -> bool {
        let outward = -self.normal;

        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let bc = self.c - self.b;
        let ap = point - self.a;
        let bp = point - self.b;

        ab.cross(ap).dot(outward) >= 0.0
            && ap.cross(ac).dot(outward) >= 0.0
            && bc.cross(bp).dot(outward) >= 0.0
    }

    /// Sweep a unit sphere against this triangle.
    ///
    /// Only impacts strictly earlier than `limit` are reported, so a scan can
    /// pass its best time so far. A face hit and an edge/vertex hit are never
    /// both considered for the same triangle: the edge and vertex solvers
    /// only run when the plane test cannot place a hit inside this tick while
    /// the sphere is already within reach of the plane.
    pub fn sweep(&self, position: Vec3, velocity: Vec3, limit: f32) -> Option<Impact> {
        let plane_distance = self.plane_distance(position);
        let approach_speed = velocity.dot(self.normal);

        if approach_speed <= MIN_APPROACH_SPEED {
            return None;
        }

        // Contact happens one radius before the plane.
        let time_to_plane = (plane_distance - 1.0) / approach_speed;

        if time_to_plane >= 0.0 && time_to_plane < limit {
            let touch_point = position + self.normal + velocity * time_to_plane;
            return self
                .inside(touch_point)
                .then(|| Impact::face(time_to_plane, self.normal));
        }

        if plane_distance >= 0.0 && plane_distance < 1.0 + approach_speed {
            return self
                .sweep_features(position, velocity)
                .filter(|impact| impact.time < limit);
        }

        None
    }

    /// Earliest contact against the three vertices and three edges.
    fn sweep_features(&self, position: Vec3, velocity: Vec3) -> Option<Impact> {
        let mut best: Option<Impact> = None;

        for vertex in [self.a, self.b, self.c] {
            if let Some(time) = point_impact(position, velocity, vertex) {
                let impact = Impact::edge(time, vertex);
                if impact.earlier_than(best.as_ref()) {
                    best = Some(impact);
                }
            }
        }

        for (start, end) in [(self.a, self.b), (self.a, self.c), (self.b, self.c)] {
            if let Some((time, point)) = edge_impact(position, velocity, start, end) {
                let impact = Impact::edge(time, point);
                if impact.earlier_than(best.as_ref()) {
                    best = Some(impact);
                }
            }
        }

        best
    }
}
