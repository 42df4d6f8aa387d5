use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::edge::Edge;
use super::vector::Vector3;
use super::vertex::{quadrance, Vertex};
use crate::config::{FrameConvention, Handedness, ReferenceAxis};
use crate::error::GeometryError;
use crate::projection::foot_of_altitude;
use crate::rational::{exact_sqrt, integer, IntoScalar, Scalar};

/// A direction of exactly unit length.
///
/// Only directions whose length is rational can be normalized without a
/// square root, so construction fails for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vector3", into = "Vector3")]
pub struct UnitAxis(Vector3);

impl UnitAxis {
    pub fn new(x: impl IntoScalar, y: impl IntoScalar, z: impl IntoScalar) -> Result<Self, GeometryError> {
        Self::from_unit(Vector3::new(x, y, z))
    }

    /// Accept `v` as-is if its squared length is exactly one.
    pub fn from_unit(v: Vector3) -> Result<Self, GeometryError> {
        let quadrance = v.quadrance();
        if quadrance.is_zero() {
            Err(GeometryError::ZeroAxis)
        } else if !quadrance.is_one() {
            Err(GeometryError::NonUnitAxis { quadrance })
        } else {
            Ok(Self(v))
        }
    }

    /// Normalize `v`, provided its length is rational.
    pub fn from_direction(v: &Vector3) -> Result<Self, GeometryError> {
        let quadrance = v.quadrance();
        if quadrance.is_zero() {
            return Err(GeometryError::ZeroAxis);
        }
        let length = exact_sqrt(&quadrance).ok_or(GeometryError::IrrationalLength { quadrance })?;
        Ok(Self(v.scale(&length.recip())))
    }

    pub fn world(axis: ReferenceAxis) -> Self {
        Self(Vector3::unit(axis.cyclic_indices()[0]))
    }

    pub fn as_vector(&self) -> &Vector3 {
        &self.0
    }
}

impl TryFrom<Vector3> for UnitAxis {
    type Error = GeometryError;
    fn try_from(v: Vector3) -> Result<Self, Self::Error> {
        Self::from_unit(v)
    }
}

impl From<UnitAxis> for Vector3 {
    fn from(axis: UnitAxis) -> Self {
        axis.0
    }
}

/// A circle in 3D space with an exact rational parameterization.
///
/// The in-plane basis `(u, v)` is derived from the axis when the circle is
/// built and is orthonormal and perpendicular to the axis. Points produced by
/// [`Circle::parameterize`] have rational coordinates and lie exactly on the
/// circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircleRepr", into = "CircleRepr")]
pub struct Circle {
    center: Vertex,
    radius: Scalar,
    axis: UnitAxis,
    convention: FrameConvention,
    u: Vector3,
    v: Vector3,
}

/// Serialized form: the basis is rebuilt on load rather than trusted.
#[derive(Serialize, Deserialize)]
struct CircleRepr {
    center: Vertex,
    radius: Scalar,
    axis: UnitAxis,
    #[serde(default)]
    convention: FrameConvention,
}

impl TryFrom<CircleRepr> for Circle {
    type Error = GeometryError;
    fn try_from(repr: CircleRepr) -> Result<Self, Self::Error> {
        Circle::with_convention(repr.center, repr.radius, repr.axis, repr.convention)
    }
}

impl From<Circle> for CircleRepr {
    fn from(circle: Circle) -> Self {
        Self {
            center: circle.center,
            radius: circle.radius,
            axis: circle.axis,
            convention: circle.convention,
        }
    }
}

impl Circle {
    pub fn new(center: Vertex, radius: impl IntoScalar, axis: UnitAxis) -> Result<Self, GeometryError> {
        Self::with_convention(center, radius, axis, FrameConvention::default())
    }

    pub fn with_convention(
        center: Vertex,
        radius: impl IntoScalar,
        axis: UnitAxis,
        convention: FrameConvention,
    ) -> Result<Self, GeometryError> {
        let radius = radius.into_scalar();
        if radius.is_negative() {
            return Err(GeometryError::NegativeRadius { radius });
        }
        let (u, v) = frame(&axis, convention);
        Ok(Self {
            center,
            radius,
            axis,
            convention,
            u,
            v,
        })
    }

    /// The circle swept by `point` when rotated about the line through `hinge`.
    ///
    /// Center is the foot of the altitude from `point` to the hinge, radius is
    /// the distance between them, and the axis is the hinge direction. Fails
    /// for a degenerate hinge and when the radius or hinge length is
    /// irrational.
    pub fn about_hinge(point: &Vertex, hinge: &Edge) -> Result<Self, GeometryError> {
        Self::about_hinge_with(point, hinge, FrameConvention::default())
    }

    #[instrument(skip_all, fields(point = %point))]
    pub fn about_hinge_with(
        point: &Vertex,
        hinge: &Edge,
        convention: FrameConvention,
    ) -> Result<Self, GeometryError> {
        let center = foot_of_altitude(point, hinge)?;
        let radius_quadrance = quadrance(point, &center);
        let radius = exact_sqrt(&radius_quadrance).ok_or(GeometryError::IrrationalLength {
            quadrance: radius_quadrance,
        })?;
        let axis = UnitAxis::from_direction(&hinge.direction())?;
        debug!(center = %center, radius = %radius, "circle about hinge");
        Self::with_convention(center, radius, axis, convention)
    }

    pub fn center(&self) -> &Vertex {
        &self.center
    }

    pub fn radius(&self) -> &Scalar {
        &self.radius
    }

    pub fn axis(&self) -> &UnitAxis {
        &self.axis
    }

    pub fn convention(&self) -> FrameConvention {
        self.convention
    }

    /// The in-plane basis `(u, v)`.
    pub fn basis(&self) -> (&Vector3, &Vector3) {
        (&self.u, &self.v)
    }

    /// Point on the circle for parameter `m`.
    ///
    /// Uses the rational parameterization of the unit circle,
    /// `((1 - m²) / (1 + m²), 2m / (1 + m²))`, scaled by the radius and placed
    /// in the circle's plane. `m = 0` gives `center + r·u`; the point
    /// `center - r·u` corresponds to `m → ∞` and is never produced.
    pub fn parameterize(&self, m: impl IntoScalar) -> Vertex {
        let m = m.into_scalar();
        let m_squared = &m * &m;
        let denom = Scalar::one() + &m_squared;
        let local_x = &self.radius * (Scalar::one() - &m_squared) / &denom;
        let local_y = &self.radius * (integer(2) * &m) / &denom;
        let offset = &self.u.scale(&local_x) + &self.v.scale(&local_y);
        &self.center + &offset
    }

    /// Parameter `m` with `parameterize(m) == point`.
    ///
    /// Returns `Ok(None)` for the one point no finite parameter reaches. On a
    /// zero-radius circle every parameter gives the center; `0` is returned.
    pub fn parameter_of(&self, point: &Vertex) -> Result<Option<Scalar>, GeometryError> {
        if !self.contains(point) {
            return Err(GeometryError::NotOnCircle);
        }
        if self.radius.is_zero() {
            return Ok(Some(Scalar::zero()));
        }
        let offset = point - &self.center;
        let local_x = offset.dot(&self.u);
        let local_y = offset.dot(&self.v);
        let denom = &self.radius + local_x;
        if denom.is_zero() {
            Ok(None)
        } else {
            Ok(Some(local_y / denom))
        }
    }

    /// Exact membership: in the circle's plane and at distance `radius`.
    pub fn contains(&self, point: &Vertex) -> bool {
        let offset = point - &self.center;
        offset.dot(self.axis.as_vector()).is_zero() && offset.quadrance() == &self.radius * &self.radius
    }
}

/// Orthonormal basis of the plane perpendicular to `axis`.
///
/// The Householder reflection `H = I - 2wwᵀ/(w·w)` with `w = e_ref - axis`
/// sends `e_ref` to `axis` and has rational entries, so `u = H·e_next` is an
/// exact unit vector perpendicular to the axis. `v` completes the frame with
/// the requested handedness.
fn frame(axis: &UnitAxis, convention: FrameConvention) -> (Vector3, Vector3) {
    let [reference, next, _] = convention.reference.cyclic_indices();
    let n = axis.as_vector();
    let w = &Vector3::unit(reference) - n;
    let e = Vector3::unit(next);

    let u = if w.is_zero() {
        e
    } else {
        let k = integer(2) * w.dot(&e) / w.quadrance();
        &e - &w.scale(&k)
    };
    let v = match convention.handedness {
        Handedness::Right => n.cross(&u),
        Handedness::Left => u.cross(n),
    };
    (u, v)
}
