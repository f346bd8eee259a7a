//! Scene module: transforms, renderers, and the frame driver.
//!
//! Transforms are owned by their entities; renderers maintain world-space
//! bounds and gate drawing on frustum visibility.

mod transform;
mod mesh_renderer;
mod scene;

pub use transform::Transform;
pub use mesh_renderer::MeshRenderer;
pub use scene::{Scene, Entity, EntityKey};
