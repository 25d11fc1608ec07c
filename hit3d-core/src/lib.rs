//! hit3d core library - 3D geometry kernel.
//!
//! Fixed-size vector and matrix algebra, homogeneous-coordinate transforms,
//! and pairwise intersection tests between primitive shapes. Everything is a
//! pure function over `Copy` value types: no allocation, no shared state,
//! callable from any thread.

pub mod collision;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use error::GeometryError;
pub use geometry::{Aabb, Ball, Plane, Segment, Sphere, Triangle};
pub use matrix::Matrix4x4;
pub use transform::{project_to_screen, transform_normal, transform_point};
pub use vector::{Vector3, Vector4};
