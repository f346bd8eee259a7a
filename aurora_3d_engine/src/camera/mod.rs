//! Camera module: perspective camera and culling frustum.
//!
//! The camera owns a Transform and lazily derives its view matrix,
//! projection matrix, and frustum, each behind its own dirty flag.

mod camera;
mod frustum;

pub use camera::Camera;
pub use frustum::{Frustum, FrustumTest};
