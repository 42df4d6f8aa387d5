use nalgebra::Point3;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::vector::Vector3;
use crate::rational::{IntoScalar, Scalar};

/// A point in 3D space with exact rational coordinates.
///
/// Vertices are immutable; moving a vertex means building a new one
/// (for instance `&vertex + &offset`). Edges share vertices through `Arc`,
/// so a vertex can be read from several threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    x: Scalar,
    y: Scalar,
    z: Scalar,
}

impl Vertex {
    pub fn new(x: impl IntoScalar, y: impl IntoScalar, z: impl IntoScalar) -> Self {
        Self {
            x: x.into_scalar(),
            y: y.into_scalar(),
            z: z.into_scalar(),
        }
    }

    pub fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn x(&self) -> &Scalar {
        &self.x
    }

    pub fn y(&self) -> &Scalar {
        &self.y
    }

    pub fn z(&self) -> &Scalar {
        &self.z
    }

    pub fn coordinates(&self) -> [&Scalar; 3] {
        [&self.x, &self.y, &self.z]
    }

    /// Position vector from the origin.
    pub fn to_vector(&self) -> Vector3 {
        Vector3 {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
        }
    }

    pub fn quadrance_to(&self, other: &Self) -> Scalar {
        quadrance(self, other)
    }

    /// Nearest `f64` point, for display and rendering only.
    ///
    /// Nothing in this crate consumes the result; feeding it back into a
    /// predicate would lose exactness.
    pub fn approximate(&self) -> Option<Point3<f64>> {
        Some(Point3::new(
            self.x.to_f64()?,
            self.y.to_f64()?,
            self.z.to_f64()?,
        ))
    }
}

impl From<Vector3> for Vertex {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Squared Euclidean distance between two vertices.
///
/// This is the only distance-like quantity the kernel computes. It is exact
/// for rational coordinates, unlike a length recovered through a square root.
pub fn quadrance(a: &Vertex, b: &Vertex) -> Scalar {
    (a - b).quadrance()
}

impl Sub for &Vertex {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl Add<&Vector3> for &Vertex {
    type Output = Vertex;
    fn add(self, rhs: &Vector3) -> Self::Output {
        Vertex {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}
