/// Mesh: GPU-ready geometry description.
///
/// Produced by the asset collaborator (binary formats are out of scope):
/// a vertex array handle, an index count, and the local-space bounds the
/// culling system transforms into world space per renderer.

use crate::math::AABB;
use crate::renderer::VertexArrayHandle;

/// Drawable geometry: backend handles plus local-space bounds.
///
/// Immutable once created; shared between renderers via `Arc`.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertex_array: VertexArrayHandle,
    index_count: u32,
    bounds: AABB,
}

impl Mesh {
    /// Wrap uploaded geometry.
    ///
    /// # Arguments
    ///
    /// * `vertex_array` - Backend VAO holding vertex layout and buffers
    /// * `index_count` - Number of indices to draw
    /// * `bounds` - Local-space AABB of the geometry
    pub fn new(vertex_array: VertexArrayHandle, index_count: u32, bounds: AABB) -> Self {
        Self {
            vertex_array,
            index_count,
            bounds,
        }
    }

    pub fn vertex_array(&self) -> VertexArrayHandle {
        self.vertex_array
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Local-space bounds (immutable for the mesh's lifetime).
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
