//! Degeneracy tests built on Cayley-Menger determinants.
//!
//! Both predicates evaluate a closed-form expansion of the determinant over
//! pairwise quadrances and compare it with exact zero. No general determinant
//! routine is involved.

pub mod collinear;
pub mod coplanar;

pub use collinear::{collinear, collinear_all, triangle_determinant};
pub use coplanar::{coplanar, coplanar_all, tetrahedron_determinant};
