/// MeshRenderer: world-AABB maintenance and the per-object culling gate.
///
/// Keeps a world-space AABB derived from the mesh's local bounds and the
/// owning transform, refreshed only when the transform's generation moved.
/// Before drawing, the AABB is classified against the camera frustum;
/// `Inside` and `Intersect` both draw, only `Outside` skips; the gate is
/// deliberately over-inclusive and never culls a partially visible object.

use std::sync::Arc;
use glam::Vec3;
use crate::camera::{Frustum, FrustumTest};
use crate::error::Result;
use crate::math::AABB;
use crate::renderer::PipelineState;
use crate::resource::{Material, Mesh};
use super::transform::Transform;

/// Renders a mesh with a material, gated by frustum visibility.
///
/// Mesh and material are optional: an unset one is a legitimate transient
/// (asset still loading) and makes `draw` a no-op, not an error.
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    mesh: Option<Arc<Mesh>>,
    material: Option<Arc<Material>>,
    world_bounds: AABB,
    /// Transform generation the world bounds were computed from
    bounds_generation: Option<u64>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self {
            mesh: None,
            material: None,
            world_bounds: AABB::new(Vec3::ZERO, Vec3::ZERO),
            bounds_generation: None,
        }
    }

    // ===== GETTERS =====

    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.mesh.as_ref()
    }

    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// World-space bounds as of the last `update_bounds`.
    pub fn world_bounds(&self) -> &AABB {
        &self.world_bounds
    }

    // ===== SETTERS =====

    /// Set or clear the mesh. Forces a bounds rebuild on the next update.
    pub fn set_mesh(&mut self, mesh: Option<Arc<Mesh>>) {
        self.mesh = mesh;
        self.bounds_generation = None;
    }

    /// Set or clear the material.
    pub fn set_material(&mut self, material: Option<Arc<Material>>) {
        self.material = material;
    }

    // ===== UPDATE =====

    /// Refresh the world AABB if the owning transform changed.
    ///
    /// Transforms the mesh's local bounds by the model matrix (8 corners,
    /// componentwise min/max). Skipped entirely when the transform
    /// generation matches the one the bounds were computed from.
    pub fn update_bounds(&mut self, transform: &Transform) {
        let mesh = match &self.mesh {
            Some(mesh) => mesh,
            None => return,
        };
        if self.bounds_generation == Some(transform.generation()) {
            return;
        }
        self.world_bounds = mesh.bounds().transformed(transform.model_matrix());
        self.bounds_generation = Some(transform.generation());
    }

    // ===== DRAW =====

    /// Draw through the pipeline cache if visible.
    ///
    /// Returns `Ok(true)` if a draw was issued, `Ok(false)` if the
    /// renderer is not ready (mesh/material unset, bounds never computed)
    /// or the world AABB is fully outside the frustum.
    pub fn draw(&self, frustum: &Frustum, state: &mut PipelineState) -> Result<bool> {
        let (mesh, material) = match (&self.mesh, &self.material) {
            (Some(mesh), Some(material)) => (mesh, material),
            _ => return Ok(false),
        };
        if self.bounds_generation.is_none() {
            return Ok(false);
        }

        if frustum.classify_aabb(&self.world_bounds) == FrustumTest::Outside {
            return Ok(false);
        }

        material.bind(state)?;
        state.bind_vertex_array(mesh.vertex_array())?;
        state.draw_indexed(mesh.index_count())?;
        Ok(true)
    }
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mesh_renderer_tests.rs"]
mod tests;
