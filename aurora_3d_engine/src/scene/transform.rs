/// Transform: position/rotation/scale with lazily derived matrices.
///
/// Setters only write through (and mark the transform dirty) when the
/// incoming value actually differs, so no-op writes never trigger
/// recomputation. `update()` rebuilds the derived state at most once per
/// dirtying batch and bumps a generation counter; dependents (Camera,
/// MeshRenderer) cache the last generation they consumed and pull instead
/// of being called back.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// An entity's spatial state and its derived matrices.
///
/// Derived values are valid after `update()`; reading them while the
/// transform is dirty yields the previous frame's values.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    model_matrix: Mat4,
    normal_matrix: Mat3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    dirty: bool,
    generation: u64,
}

impl Transform {
    /// Identity transform at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            model_matrix: Mat4::IDENTITY,
            normal_matrix: Mat3::IDENTITY,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::NEG_Z,
            dirty: false,
            generation: 0,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Model matrix (T·R·S composition, column-major).
    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }

    /// Normal matrix for transforming surface normals.
    pub fn normal_matrix(&self) -> &Mat3 {
        &self.normal_matrix
    }

    /// Local +X axis in world space (model matrix column 0).
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Local +Y axis in world space (model matrix column 1).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Viewing direction in world space: the negated model matrix column 2
    /// (right-handed, camera looks down -Z).
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// True if a mutation is pending recomputation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Counter incremented by every `update()` that recomputed something.
    ///
    /// Dependents compare this against the generation they last consumed
    /// to detect changes without a callback.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ===== SETTERS: write-through only on change =====

    pub fn set_position(&mut self, position: Vec3) {
        if self.position != position {
            self.position = position;
            self.dirty = true;
        }
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        if self.rotation != rotation {
            self.rotation = rotation;
            self.dirty = true;
        }
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        if self.scale != scale {
            self.scale = scale;
            self.dirty = true;
        }
    }

    /// Offset the position by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    /// Apply an euler-angle rotation delta (radians, XYZ order).
    ///
    /// With `world_space` the delta is expressed in world axes and
    /// premultiplies the current rotation; otherwise it is a local-axis
    /// rotation and postmultiplies.
    pub fn rotate_euler(&mut self, x: f32, y: f32, z: f32, world_space: bool) {
        let delta = Quat::from_euler(EulerRot::XYZ, x, y, z);
        let rotation = if world_space {
            delta * self.rotation
        } else {
            self.rotation * delta
        };
        self.set_rotation(rotation.normalize());
    }

    // ===== UPDATE =====

    /// Recompute the derived matrices and basis vectors if dirty.
    ///
    /// Returns `true` if a recomputation happened. A second call with no
    /// intervening mutation does nothing and leaves the generation counter
    /// untouched.
    pub fn update(&mut self) -> bool {
        if !self.dirty {
            return false;
        }

        self.model_matrix =
            Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position);

        // Uniform scale: the upper-left 3x3 is already a correct normal
        // matrix (orthonormal rotation times a scalar). Non-uniform scale
        // needs the general transpose(inverse) form or normals shear.
        let upper = Mat3::from_mat4(self.model_matrix);
        self.normal_matrix = if self.scale.x == self.scale.y && self.scale.y == self.scale.z {
            upper
        } else {
            upper.inverse().transpose()
        };

        self.right = self.model_matrix.col(0).truncate();
        self.up = self.model_matrix.col(1).truncate();
        self.forward = -self.model_matrix.col(2).truncate();

        self.generation = self.generation.wrapping_add(1);
        self.dirty = false;
        true
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
