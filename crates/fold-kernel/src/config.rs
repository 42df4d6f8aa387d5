//! Conventions for orienting the in-plane frame of a circle.
//!
//! A circle only stores its axis; the two basis vectors spanning its plane are
//! derived from the axis under a [`FrameConvention`]. With the defaults and an
//! axis of `(0, 0, 1)` the frame is `u = (1, 0, 0)`, `v = (0, 1, 0)`.

use serde::{Deserialize, Serialize};

/// World axis that the frame construction maps onto the circle axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceAxis {
    X,
    Y,
    #[default]
    Z,
}

impl ReferenceAxis {
    /// Coordinate indices of this axis and the two that follow it cyclically.
    /// The second and third become `u` and `v` before reflection.
    pub(crate) fn cyclic_indices(self) -> [usize; 3] {
        match self {
            ReferenceAxis::X => [0, 1, 2],
            ReferenceAxis::Y => [1, 2, 0],
            ReferenceAxis::Z => [2, 0, 1],
        }
    }
}

/// Orientation of `(u, v, axis)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// `u × v = axis`.
    #[default]
    Right,
    /// `u × v = -axis`.
    Left,
}

/// How a circle's `u`/`v` basis is derived from its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConvention {
    pub reference: ReferenceAxis,
    pub handedness: Handedness,
}

impl FrameConvention {
    pub fn left_handed() -> Self {
        Self {
            handedness: Handedness::Left,
            ..Self::default()
        }
    }
}
