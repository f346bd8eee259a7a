/// Scene: entity container and two-pass frame driver.
///
/// Entities (a Transform plus a MeshRenderer) live in a SlotMap for O(1)
/// insert/remove with stable keys. A frame is strictly two ordered passes:
/// Update (transform recomputation, world-bounds refresh) followed by
/// Render (frustum gate, then draw through the pipeline cache).
/// Single-threaded and cooperative: no locking, but call order is
/// semantically load-bearing.

use slotmap::{new_key_type, SlotMap};
use crate::camera::Camera;
use crate::engine_trace;
use crate::error::Result;
use crate::renderer::PipelineState;
use super::mesh_renderer::MeshRenderer;
use super::transform::Transform;

new_key_type! {
    /// Stable key for an Entity within a Scene.
    ///
    /// Keys remain valid even after other entities are removed.
    pub struct EntityKey;
}

/// A scene object: spatial state plus its renderer.
#[derive(Debug, Clone)]
pub struct Entity {
    transform: Transform,
    renderer: MeshRenderer,
}

impl Entity {
    fn new() -> Self {
        Self {
            transform: Transform::new(),
            renderer: MeshRenderer::new(),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn renderer(&self) -> &MeshRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut MeshRenderer {
        &mut self.renderer
    }
}

/// Entity container and frame driver.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: SlotMap<EntityKey, Entity>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Add an entity with an identity transform and an empty renderer.
    pub fn create_entity(&mut self) -> EntityKey {
        let key = self.entities.insert(Entity::new());
        engine_trace!("aurora3d::Scene", "entity {:?} created", key);
        key
    }

    /// Remove an entity. Returns false if the key is invalid.
    pub fn remove_entity(&mut self, key: EntityKey) -> bool {
        self.entities.remove(key).is_some()
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities (key, entity).
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    // ===== FRAME PASSES =====

    /// Update pass: recompute dirty transforms, then refresh world bounds
    /// for every renderer whose transform changed.
    pub fn update(&mut self) {
        for entity in self.entities.values_mut() {
            entity.transform.update();
            let Entity { transform, renderer } = entity;
            renderer.update_bounds(transform);
        }
    }

    /// Render pass: frustum-gate each renderer against the camera and
    /// draw the visible ones through the pipeline cache.
    ///
    /// The camera must have been updated after its last mutation, or the
    /// gate tests against a stale frustum. Returns the number of draws
    /// issued.
    pub fn render(&self, camera: &Camera, state: &mut PipelineState) -> Result<u32> {
        let mut drawn = 0;
        for entity in self.entities.values() {
            if entity.renderer.draw(camera.frustum(), state)? {
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    /// Run one full frame in the required order: scene update, camera
    /// update, then render. Encodes the invariant that the view and
    /// frustum are rebuilt before any visibility test runs.
    pub fn frame(&mut self, camera: &mut Camera, state: &mut PipelineState) -> Result<u32> {
        self.update();
        camera.update();
        self.render(camera, state)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
