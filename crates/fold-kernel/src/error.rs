use thiserror::Error;

use crate::rational::Scalar;

/// Failures raised by constructions that cannot produce exact geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("edge endpoints coincide, so the line through them is undefined")]
    DegenerateEdge,

    #[error("axis has zero length")]
    ZeroAxis,

    #[error("axis must have unit length, got squared length {quadrance}")]
    NonUnitAxis { quadrance: Scalar },

    #[error("radius must be non-negative, got {radius}")]
    NegativeRadius { radius: Scalar },

    #[error("quadrance {quadrance} is not the square of a rational length")]
    IrrationalLength { quadrance: Scalar },

    #[error("point does not lie on the circle")]
    NotOnCircle,
}
