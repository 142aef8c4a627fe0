mod errors;
pub mod vector;

pub use errors::VectorError;
pub use vector::{Vector, Vector3D, Vector3f};
