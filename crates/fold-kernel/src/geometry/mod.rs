pub mod vertex;
pub mod vector;
pub mod edge;
pub mod circle;

pub use circle::{Circle, UnitAxis};
pub use edge::Edge;
pub use vector::Vector3;
pub use vertex::{quadrance, Vertex};
