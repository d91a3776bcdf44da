//! Impact records produced by swept-sphere queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What part of a triangle the sphere touches first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Contact {
    /// The sphere meets the interior of the triangle's face.
    ///
    /// `normal` is the triangle's inward unit normal.
    Face {
        /// Inward unit normal of the face that was hit.
        normal: Vec3,
    },

    /// The sphere meets one of the triangle's edges or vertices.
    Edge {
        /// Contact point on the edge or the vertex itself, in ellipsoid space.
        point: Vec3,
    },
}

/// Earliest contact found by a sweep.
///
/// A sweep moves a unit sphere from `position` to `position + velocity`.
/// `time` is the fraction of that motion consumed before contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// Time of impact as a fraction of the tick's velocity.
    ///
    /// - `0.0` = touching at the start of the tick
    /// - `0.5` = contact halfway through the motion
    ///
    /// Edge and vertex contacts may report slightly negative times (down to
    /// [`CONTACT_TOLERANCE`](super::solver::CONTACT_TOLERANCE)) when the sphere
    /// already overlaps the feature at the start of the tick.
    pub time: f32,

    /// The feature that was hit.
    pub contact: Contact,

    /// Index of the triangle in the collision world.
    ///
    /// [`Triangle::sweep`](super::Triangle::sweep) does not know its own index
    /// and leaves this at 0; [`CollisionWorld::sweep`](super::CollisionWorld::sweep)
    /// fills it in with [`Impact::with_triangle`]. Only impacts returned by the
    /// world carry a meaningful index.
    pub triangle: usize,
}

impl Impact {
    /// Create a face impact. The triangle index starts at 0 until tagged.
    pub fn face(time: f32, normal: Vec3) -> Self {
        Self {
            time,
            contact: Contact::Face { normal },
            triangle: 0,
        }
    }

    /// Create an edge or vertex impact. The triangle index starts at 0 until tagged.
    pub fn edge(time: f32, point: Vec3) -> Self {
        Self {
            time,
            contact: Contact::Edge { point },
            triangle: 0,
        }
    }

    /// Tag this impact with the triangle that produced it.
    #[inline]
    pub fn with_triangle(mut self, triangle: usize) -> Self {
        self.triangle = triangle;
        self
    }

    /// Check if this impact hit a face.
    #[inline]
    pub fn is_face(&self) -> bool {
        matches!(self.contact, Contact::Face { .. })
    }

    /// Check if this impact is earlier than `other`.
    ///
    /// `None` counts as "never", so any impact is earlier than no impact.
    #[inline]
    pub fn earlier_than(&self, other: Option<&Impact>) -> bool {
        other.map_or(true, |o| self.time < o.time)
    }
}
