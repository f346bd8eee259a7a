/// Camera: view/projection matrices and culling frustum over a Transform.
///
/// Each derived quantity has its own dirty flag, with the cascade rules
/// declared in one place: a transform change invalidates the view and
/// therefore the frustum; a projection-parameter change invalidates the
/// projection and therefore the frustum. `update()` rebuilds exactly the
/// dirty quantities, never unconditionally.
///
/// Preconditions (documented, not validated; misconfiguration produces
/// NaN/Inf that propagate through matrices and culling, see error module):
/// `0 < fov < PI`, `0 < near < far`, unit-scaled camera transform.

use bitflags::bitflags;
use glam::Mat4;
use crate::scene::Transform;
use super::frustum::Frustum;

bitflags! {
    /// Dirty state per derived quantity, with the dependency edges
    /// VIEW → FRUSTUM and PROJECTION → FRUSTUM encoded by the
    /// mark_* helpers below.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct CameraDirty: u8 {
        const VIEW       = 1 << 0;
        const PROJECTION = 1 << 1;
        const FRUSTUM    = 1 << 2;
    }
}

/// Perspective camera driven by its own Transform.
///
/// Mutate the transform through `transform_mut()`; the camera detects the
/// change on the next `update()` via the transform's generation counter.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
    dirty: CameraDirty,
    /// Transform generation the view matrix was last derived from
    transform_generation: u64,
}

impl Camera {
    /// Create a camera and derive its initial matrices and frustum.
    ///
    /// # Arguments
    ///
    /// * `fov` - Vertical field of view in radians, in (0, PI)
    /// * `aspect` - Viewport width / height
    /// * `near` - Near plane distance, positive and less than `far`
    /// * `far` - Far plane distance
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let transform = Transform::new();
        let generation = transform.generation();
        let mut camera = Self {
            transform,
            fov,
            aspect,
            near,
            far,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            // Placeholder, rebuilt below before the camera is observable
            frustum: Frustum::from_camera(
                glam::Vec3::ZERO,
                glam::Vec3::X,
                glam::Vec3::Y,
                glam::Vec3::NEG_Z,
                fov,
                aspect,
                near,
                far,
            ),
            dirty: CameraDirty::all(),
            transform_generation: generation,
        };
        camera.update();
        camera
    }

    // ===== GETTERS =====

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the camera's transform (camera controllers).
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (right-handed perspective).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum planes for culling, valid as of the last `update()`.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    // ===== SETTERS: compare, then cascade =====

    pub fn set_fov(&mut self, fov: f32) {
        if self.fov != fov {
            self.fov = fov;
            self.mark_projection_dirty();
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if self.aspect != aspect {
            self.aspect = aspect;
            self.mark_projection_dirty();
        }
    }

    pub fn set_near(&mut self, near: f32) {
        if self.near != near {
            self.near = near;
            self.mark_projection_dirty();
        }
    }

    pub fn set_far(&mut self, far: f32) {
        if self.far != far {
            self.far = far;
            self.mark_projection_dirty();
        }
    }

    fn mark_view_dirty(&mut self) {
        self.dirty |= CameraDirty::VIEW | CameraDirty::FRUSTUM;
    }

    fn mark_projection_dirty(&mut self) {
        self.dirty |= CameraDirty::PROJECTION | CameraDirty::FRUSTUM;
    }

    // ===== UPDATE =====

    /// Rebuild the dirty derived quantities.
    ///
    /// Must run after transform/parameter mutation and before any
    /// visibility test in the same frame, or culling uses a stale frustum.
    pub fn update(&mut self) {
        self.transform.update();
        if self.transform.generation() != self.transform_generation {
            self.transform_generation = self.transform.generation();
            self.mark_view_dirty();
        }

        if self.dirty.contains(CameraDirty::VIEW) {
            self.view_matrix = self.transform.model_matrix().inverse();
        }

        if self.dirty.contains(CameraDirty::PROJECTION) {
            self.projection_matrix =
                Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        }

        if self.dirty.contains(CameraDirty::FRUSTUM) {
            self.frustum = Frustum::from_camera(
                self.transform.position(),
                self.transform.right(),
                self.transform.up(),
                self.transform.forward(),
                self.fov,
                self.aspect,
                self.near,
                self.far,
            );
        }

        self.dirty = CameraDirty::empty();
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
