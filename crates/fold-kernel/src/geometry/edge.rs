use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::vector::Vector3;
use super::vertex::{quadrance, Vertex};
use crate::predicates::collinear;
use crate::rational::Scalar;

/// An ordered pair of shared vertices.
///
/// The edge holds no coordinates of its own. Equality compares the two
/// vertices by value and in order, so `(a, b)` and `(b, a)` differ unless
/// `a == b`. Both ends may be the same vertex; such an edge has zero
/// quadrance and is only rejected by operations that need a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    first: Arc<Vertex>,
    second: Arc<Vertex>,
}

impl Edge {
    pub fn new(first: impl Into<Arc<Vertex>>, second: impl Into<Arc<Vertex>>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &Vertex {
        &self.first
    }

    pub fn second(&self) -> &Vertex {
        &self.second
    }

    /// Shared handles to both ends, for building further edges on them.
    pub fn vertices(&self) -> (&Arc<Vertex>, &Arc<Vertex>) {
        (&self.first, &self.second)
    }

    pub fn quadrance(&self) -> Scalar {
        quadrance(&self.first, &self.second)
    }

    /// Displacement from the first vertex to the second.
    pub fn direction(&self) -> Vector3 {
        &*self.second - &*self.first
    }

    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    pub fn reversed(&self) -> Self {
        Self {
            first: Arc::clone(&self.second),
            second: Arc::clone(&self.first),
        }
    }

    /// Whether `point` lies on the infinite line through this edge.
    /// Every point passes for a degenerate edge.
    pub fn contains_on_line(&self, point: &Vertex) -> bool {
        collinear(&self.first, &self.second, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::integer;

    #[test]
    fn test_edge_quadrance() {
        let e = Edge::new(Vertex::new(0, 0, 0), Vertex::new(0, 1, 0));
        assert_eq!(e.quadrance(), integer(1));
    }

    #[test]
    fn test_edges_share_vertices() {
        let shared = Arc::new(Vertex::new(1, 1, 1));
        let e1 = Edge::new(Arc::clone(&shared), Vertex::new(0, 0, 0));
        let e2 = Edge::new(Vertex::new(2, 0, 0), Arc::clone(&shared));
        assert!(Arc::ptr_eq(e1.vertices().0, e2.vertices().1));
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_equality_is_ordered() {
        let a = Vertex::new(0, 0, 0);
        let b = Vertex::new(1, 0, 0);
        let ab = Edge::new(a.clone(), b.clone());
        assert_eq!(ab, Edge::new(a.clone(), b.clone()));
        assert_ne!(ab, Edge::new(b, a));
        assert_eq!(ab.reversed().reversed(), ab);
    }

    #[test]
    fn test_degenerate_edge_is_allowed() {
        let v = Arc::new(Vertex::new(3, 1, 4));
        let e = Edge::new(Arc::clone(&v), v);
        assert!(e.is_degenerate());
        assert!(e.direction().is_zero());
        assert_eq!(e.quadrance(), integer(0));
    }

    #[test]
    fn test_contains_on_line() {
        let e = Edge::new(Vertex::new(0, 0, 0), Vertex::new(1, 1, 1));
        assert!(e.contains_on_line(&Vertex::new(-5, -5, -5)));
        assert!(!e.contains_on_line(&Vertex::new(1, 1, 0)));
    }
}
