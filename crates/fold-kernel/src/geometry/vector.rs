use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

use crate::rational::{IntoScalar, Scalar};

/// A displacement in 3D space with exact rational components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vector3 {
    pub fn new(x: impl IntoScalar, y: impl IntoScalar, z: impl IntoScalar) -> Self {
        Self {
            x: x.into_scalar(),
            y: y.into_scalar(),
            z: z.into_scalar(),
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn unit_x() -> Self {
        Self::new(1, 0, 0)
    }

    pub fn unit_y() -> Self {
        Self::new(0, 1, 0)
    }

    pub fn unit_z() -> Self {
        Self::new(0, 0, 1)
    }

    /// World basis vector for coordinate index 0, 1 or 2.
    pub(crate) fn unit(index: usize) -> Self {
        match index {
            0 => Self::unit_x(),
            1 => Self::unit_y(),
            _ => Self::unit_z(),
        }
    }

    pub fn dot(&self, other: &Self) -> Scalar {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    /// Squared length. Lengths themselves are generally irrational and are
    /// never taken here.
    pub fn quadrance(&self) -> Scalar {
        self.dot(self)
    }

    pub fn scale(&self, factor: &Scalar) -> Self {
        Self {
            x: &self.x * factor,
            y: &self.y * factor,
            z: &self.z * factor,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl Add for &Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}

impl Sub for &Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3 {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}
