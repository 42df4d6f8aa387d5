//! Orthogonal projection of a point onto the line through an edge.

use num_traits::Zero;
use tracing::{debug, instrument};

use crate::error::GeometryError;
use crate::geometry::edge::Edge;
use crate::geometry::vertex::Vertex;
use crate::rational::Scalar;

/// Position of the foot of the altitude along `edge`, as
/// `t = ((A - B)·(A - P)) / |A - B|²`.
///
/// `t = 0` at the first vertex and `t = 1` at the second.
pub fn projection_parameter(point: &Vertex, edge: &Edge) -> Result<Scalar, GeometryError> {
    let a = edge.first();
    let b = edge.second();
    let denom = edge.quadrance();
    if denom.is_zero() {
        return Err(GeometryError::DegenerateEdge);
    }
    Ok((a - b).dot(&(a - point)) / denom)
}

/// Foot of the altitude from `point` to the line through `edge`: the closest
/// point on that line, computed exactly.
///
/// Fails with [`GeometryError::DegenerateEdge`] when the edge endpoints coincide.
#[instrument(skip_all, fields(point = %point))]
pub fn foot_of_altitude(point: &Vertex, edge: &Edge) -> Result<Vertex, GeometryError> {
    let t = projection_parameter(point, edge)?;
    let foot = edge.first() + &edge.direction().scale(&t);
    debug!(%t, foot = %foot, "foot of altitude");
    Ok(foot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vertex::quadrance;
    use crate::rational::{integer, ratio};
    use std::sync::Arc;

    #[test]
    fn test_foot_of_altitude() {
        let foot = foot_of_altitude(
            &Vertex::new(1, 2, 0),
            &Edge::new(Vertex::new(0, 0, 0), Vertex::new(2, 0, 0)),
        )
        .unwrap();
        assert_eq!(foot, Vertex::new(1, 0, 0));
    }

    #[test]
    fn test_foot_is_rational() {
        let edge = Edge::new(Vertex::new(0, 0, 0), Vertex::new(3, 0, 0));
        let p = Vertex::new(1, 1, 1);
        assert_eq!(projection_parameter(&p, &edge), Ok(ratio(1, 3)));
        assert_eq!(foot_of_altitude(&p, &edge).unwrap(), Vertex::new(1, 0, 0));

        let skew = Edge::new(Vertex::new(0, 0, 0), Vertex::new(1, 1, 0));
        let foot = foot_of_altitude(&Vertex::new(1, 0, 0), &skew).unwrap();
        assert_eq!(foot, Vertex::new(ratio(1, 2), ratio(1, 2), 0));
    }

    #[test]
    fn test_foot_beyond_segment() {
        let edge = Edge::new(Vertex::new(0, 0, 0), Vertex::new(1, 0, 0));
        let p = Vertex::new(-4, 3, 0);
        assert_eq!(projection_parameter(&p, &edge), Ok(integer(-4)));
        assert_eq!(foot_of_altitude(&p, &edge).unwrap(), Vertex::new(-4, 0, 0));
    }

    #[test]
    fn test_point_on_line_is_its_own_foot() {
        let edge = Edge::new(Vertex::new(1, 1, 1), Vertex::new(3, 5, 7));
        let p = Vertex::new(2, 3, 4);
        assert_eq!(foot_of_altitude(&p, &edge).unwrap(), p);
        assert_eq!(foot_of_altitude(edge.first(), &edge).unwrap(), *edge.first());
    }

    #[test]
    fn test_altitude_is_perpendicular() {
        let edge = Edge::new(Vertex::new(1, -2, 3), Vertex::new(4, 0, -1));
        let p = Vertex::new(5, 5, 5);
        let foot = foot_of_altitude(&p, &edge).unwrap();
        assert!((&p - &foot).dot(&edge.direction()).is_zero());
        // Pythagoras, exactly.
        assert_eq!(
            quadrance(&p, edge.first()),
            quadrance(&p, &foot) + quadrance(&foot, edge.first())
        );
    }

    #[test]
    fn test_degenerate_edge_is_rejected() {
        let v = Arc::new(Vertex::new(2, 2, 2));
        let edge = Edge::new(Arc::clone(&v), v);
        assert_eq!(
            foot_of_altitude(&Vertex::origin(), &edge),
            Err(GeometryError::DegenerateEdge)
        );
    }
}
