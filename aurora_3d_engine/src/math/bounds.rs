/// Axis-Aligned Bounding Box
///
/// Two lifetimes exist in practice: a mesh-local AABB, immutable once the
/// mesh is created, and a per-renderer world-space AABB recomputed whenever
/// the owning transform changes.

use glam::{Mat4, Vec3};

/// Axis-aligned bounding box defined by min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create an AABB from min/max corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The componentwise bound of a corner set.
    pub fn from_corners(corners: &[Vec3]) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for &corner in corners {
            min = min.min(corner);
            max = max.max(corner);
        }
        Self { min, max }
    }

    /// All 8 corners of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Transforms all 8 corners and takes the componentwise min/max: a
    /// conservative, axis-realigned bound rather than a tight oriented box.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in self.corners() {
            let world = matrix.transform_point3(corner);
            min = min.min(world);
            max = max.max(world);
        }
        AABB { min, max }
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
