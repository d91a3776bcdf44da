//! Swept-sphere collision against static triangle meshes.
//!
//! All queries work in *ellipsoid space*: world coordinates divided by the
//! player's collider radii, so the collider becomes a unit sphere.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: The triangle registry for a loaded level
//! - [`Triangle`]: A preprocessed triangle with inward normal and plane offset
//! - [`Impact`]: Earliest contact found by a sweep (face, edge or vertex)
//!
//! # Sweep Algorithm
//!
//! For each triangle the sphere is first swept against the plane. If the
//! plane contact falls inside this tick and inside the triangle, that is a
//! face hit. If the sphere is already within one radius of the plane, the
//! three vertices and three edges are solved in closed form instead. The
//! earliest result over all triangles wins.

mod ellipsoid;
mod impact;
mod solver;
mod triangle;
mod world;

pub use ellipsoid::EllipsoidSpace;
pub use impact::{Contact, Impact};
pub use self_test::SelfTestError;
pub use solver::{edge_impact, point_impact, CONTACT_TOLERANCE};
pub use triangle::{Triangle, MIN_APPROACH_SPEED};
pub use world::{CollisionWorld, Hug, MeshError, HUG_SETTLE, HUG_TOLERANCE};
