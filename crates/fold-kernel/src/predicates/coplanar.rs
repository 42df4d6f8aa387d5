use num_traits::Zero;
use tracing::trace;

use super::collinear::collinear;
use crate::geometry::vertex::{quadrance, Vertex};
use crate::rational::{integer, Scalar};

/// The 5×5 Cayley-Menger determinant of four points, expanded over the six
/// pairwise quadrances:
///
/// ```text
/// -2 AB AC BC + 2 AB AD BC + 2 AC AD BC - 2 AD² BC - 2 AD BC² +
///  2 AB AC BD - 2 AC² BD - 2 AB AD BD + 2 AC AD BD + 2 AC BC BD +
///  2 AD BC BD - 2 AC BD² - 2 AB² CD + 2 AB AC CD + 2 AB AD CD -
///  2 AC AD CD + 2 AB BC CD + 2 AD BC CD + 2 AB BD CD + 2 AC BD CD -
///  2 BC BD CD - 2 AB CD²
/// ```
///
/// It equals `288` times the squared volume of the tetrahedron. Every term
/// carries a factor of two, which is applied once at the end.
pub fn tetrahedron_determinant(a: &Vertex, b: &Vertex, c: &Vertex, d: &Vertex) -> Scalar {
    let ab = quadrance(a, b);
    let ac = quadrance(a, c);
    let ad = quadrance(a, d);
    let bc = quadrance(b, c);
    let bd = quadrance(b, d);
    let cd = quadrance(c, d);

    let t = |p: &Scalar, q: &Scalar, r: &Scalar| p * q * r;

    let half = -t(&ab, &ab, &cd)
        - t(&ab, &ac, &bc)
        + t(&ab, &ac, &bd)
        + t(&ab, &ac, &cd)
        + t(&ab, &ad, &bc)
        - t(&ab, &ad, &bd)
        + t(&ab, &ad, &cd)
        + t(&ab, &bc, &cd)
        + t(&ab, &bd, &cd)
        - t(&ab, &cd, &cd)
        - t(&ac, &ac, &bd)
        + t(&ac, &ad, &bc)
        + t(&ac, &ad, &bd)
        - t(&ac, &ad, &cd)
        + t(&ac, &bc, &bd)
        - t(&ac, &bd, &bd)
        + t(&ac, &bd, &cd)
        - t(&ad, &ad, &bc)
        - t(&ad, &bc, &bc)
        + t(&ad, &bc, &bd)
        + t(&ad, &bc, &cd)
        - t(&bc, &bd, &cd);

    integer(2) * half
}

/// Whether four points lie in one plane.
///
/// Any configuration with three collinear points, including repeated points,
/// is coplanar.
pub fn coplanar(a: &Vertex, b: &Vertex, c: &Vertex, d: &Vertex) -> bool {
    let determinant = tetrahedron_determinant(a, b, c, d);
    trace!(%determinant, "coplanarity determinant");
    determinant.is_zero()
}

/// Whether all `points` lie in one plane.
///
/// Sets of fewer than four points, and sets whose points are all collinear,
/// are coplanar.
pub fn coplanar_all(points: &[Vertex]) -> bool {
    let Some(a) = points.first() else {
        return true;
    };
    let Some(b) = points.iter().find(|p| *p != a) else {
        return true;
    };
    let Some(c) = points.iter().find(|p| !collinear(a, b, p)) else {
        return true;
    };
    points.iter().all(|d| coplanar(a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::ratio;

    #[test]
    fn test_three_collinear_plus_one_is_coplanar() {
        let v1 = Vertex::new(0, 0, 0);
        let v2 = Vertex::new(0, 1, 0);
        let v3 = Vertex::new(0, 2, 0);
        let v4 = Vertex::new(1, 0, 0);
        assert!(coplanar(&v1, &v2, &v3, &v4));
    }

    #[test]
    fn test_corner_tetrahedron_is_not_coplanar() {
        let o = Vertex::new(0, 0, 0);
        let x = Vertex::new(1, 0, 0);
        let y = Vertex::new(0, 1, 0);
        let z = Vertex::new(0, 0, 1);
        assert!(!coplanar(&o, &x, &y, &z));
        // Volume 1/6, so 288 * (1/6)^2 = 8.
        assert_eq!(tetrahedron_determinant(&o, &x, &y, &z), integer(8));
    }

    #[test]
    fn test_square_is_coplanar() {
        let a = Vertex::new(0, 0, 5);
        let b = Vertex::new(3, 0, 5);
        let c = Vertex::new(3, 3, 5);
        let d = Vertex::new(0, 3, 5);
        assert!(coplanar(&a, &b, &c, &d));
    }

    #[test]
    fn test_tilted_rational_plane() {
        // Plane x + 2y - 3z = 1.
        let a = Vertex::new(1, 0, 0);
        let b = Vertex::new(0, ratio(1, 2), 0);
        let c = Vertex::new(0, 0, ratio(-1, 3));
        let d = Vertex::new(ratio(7, 4), ratio(3, 8), ratio(1, 2));
        assert!(coplanar(&a, &b, &c, &d));

        let lifted = Vertex::new(ratio(7, 4), ratio(3, 8), ratio(51, 100));
        assert!(!coplanar(&a, &b, &c, &lifted));
    }

    #[test]
    fn test_repeated_vertices_are_coplanar() {
        let a = Vertex::new(1, 2, 3);
        let b = Vertex::new(-4, 0, 9);
        let c = Vertex::new(7, 7, -2);
        assert!(coplanar(&a, &a, &b, &c));
        assert!(coplanar(&a, &b, &c, &b));
        assert!(coplanar(&c, &c, &c, &c));
    }

    #[test]
    fn test_coplanar_all() {
        let grid: Vec<Vertex> = (0..3)
            .flat_map(|i| (0..3).map(move |j| Vertex::new(i, j, i + j)))
            .collect();
        assert!(coplanar_all(&grid));

        let mut lifted = grid.clone();
        lifted.push(Vertex::new(0, 0, 1));
        assert!(!coplanar_all(&lifted));

        let line: Vec<Vertex> = (0..5).map(|i| Vertex::new(i, i, i)).collect();
        assert!(coplanar_all(&line));
        assert!(coplanar_all(&line[..2]));
        assert!(coplanar_all(&[]));
    }
}
