//! Math primitives for visibility computation
//!
//! Planes and axis-aligned bounding boxes. Vector/matrix math itself
//! comes from glam (re-exported at the crate root).

mod plane;
mod bounds;

pub use plane::Plane;
pub use bounds::AABB;
