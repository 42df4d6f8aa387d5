//! Exact predicates and constructions for points in 3D space.
//!
//! Coordinates are arbitrary-precision rationals and every test that compares
//! against zero works on quadrances (squared distances), so no square root or
//! float rounding ever reaches a predicate.

pub mod rational;
pub mod error;
pub mod config;
pub mod geometry;
pub mod predicates;
pub mod projection;

pub use config::{FrameConvention, Handedness, ReferenceAxis};
pub use error::GeometryError;
pub use geometry::{quadrance, Circle, Edge, UnitAxis, Vector3, Vertex};
pub use predicates::{collinear, collinear_all, coplanar, coplanar_all};
pub use projection::{foot_of_altitude, projection_parameter};
pub use rational::{IntoScalar, Scalar};
