use num_traits::Zero;
use tracing::trace;

use crate::geometry::vertex::{quadrance, Vertex};
use crate::rational::{integer, Scalar};

/// The 4×4 Cayley-Menger determinant of three points, expanded:
///
/// `AB² + AC² + BC² - 2·AB·AC - 2·AB·BC - 2·AC·BC`
///
/// where `AB`, `AC`, `BC` are quadrances. It equals `-16` times the squared
/// area of the triangle, so it vanishes exactly for flat triangles.
pub fn triangle_determinant(a: &Vertex, b: &Vertex, c: &Vertex) -> Scalar {
    let ab = quadrance(a, b);
    let ac = quadrance(a, c);
    let bc = quadrance(b, c);
    let two = integer(2);

    &ab * &ab + &ac * &ac + &bc * &bc
        - &two * &ab * &ac
        - &two * &ab * &bc
        - &two * &ac * &bc
}

/// Whether three points lie on one line. Coincident points count as collinear.
pub fn collinear(a: &Vertex, b: &Vertex, c: &Vertex) -> bool {
    let determinant = triangle_determinant(a, b, c);
    trace!(%determinant, "collinearity determinant");
    determinant.is_zero()
}

/// Whether all `points` lie on one line.
///
/// Fewer than three points, or any set whose points all coincide, is collinear.
pub fn collinear_all(points: &[Vertex]) -> bool {
    let Some(first) = points.first() else {
        return true;
    };
    let Some(second) = points.iter().find(|p| *p != first) else {
        return true;
    };
    points.iter().all(|p| collinear(first, second, p))
}
