/// Frustum: six named clipping planes for visibility culling.
///
/// Every plane normal points inward (toward the visible volume), so a point
/// is inside the frustum iff its signed distance to all six planes is
/// non-negative. Rebuilt by the Camera only when the view or projection
/// changed, never unconditionally per frame.

use glam::Vec3;
use crate::math::{Plane, AABB};

/// Result of a 3-way frustum/AABB classification.
///
/// The culling gate draws on `Inside` and `Intersect` and skips only
/// `Outside`: deliberately over-inclusive, a partially visible object is
/// never culled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB straddles at least one plane
    Intersect,
}

/// Six frustum planes with fixed semantic names.
///
/// Named fields (rather than a bare array) so the plane order cannot be
/// silently shuffled; `planes()` yields them in the fixed
/// {top, bottom, left, right, near, far} order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub top: Plane,
    pub bottom: Plane,
    pub left: Plane,
    pub right: Plane,
    pub near: Plane,
    pub far: Plane,
}

impl Frustum {
    /// Build the frustum from camera geometry.
    ///
    /// `fov` is the vertical field of view in radians; `right`, `up`,
    /// `forward` are the camera's world-space basis vectors and must be
    /// unit length (a scaled camera transform skews the frustum).
    ///
    /// The near/far rectangle corners are derived from the near/far plane
    /// centers offset along ±right and ±up, and each plane is built from a
    /// fixed corner triple whose winding makes the normal point inward.
    #[allow(clippy::too_many_arguments)]
    pub fn from_camera(
        position: Vec3,
        right: Vec3,
        up: Vec3,
        forward: Vec3,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let tan_half_fov = (fov * 0.5).tan();
        let h_near = 2.0 * tan_half_fov * near;
        let w_near = h_near * aspect;
        let h_far = 2.0 * tan_half_fov * far;
        let w_far = h_far * aspect;

        let near_center = position + forward * near;
        let far_center = position + forward * far;

        let near_up = up * (h_near * 0.5);
        let near_right = right * (w_near * 0.5);
        let far_up = up * (h_far * 0.5);
        let far_right = right * (w_far * 0.5);

        let ntl = near_center + near_up - near_right;
        let ntr = near_center + near_up + near_right;
        let nbl = near_center - near_up - near_right;
        let nbr = near_center - near_up + near_right;
        let ftl = far_center + far_up - far_right;
        let ftr = far_center + far_up + far_right;
        let fbl = far_center - far_up - far_right;
        let fbr = far_center - far_up + far_right;

        // The corner triples and their winding are load-bearing: they give
        // each plane an inward normal. See the geometric-center test.
        Self {
            top: Plane::from_points(ntr, ntl, ftl),
            bottom: Plane::from_points(nbl, nbr, fbr),
            left: Plane::from_points(ntl, nbl, fbl),
            right: Plane::from_points(nbr, ntr, fbr),
            near: Plane::from_points(ntl, ntr, nbr),
            far: Plane::from_points(ftr, ftl, fbl),
        }
    }

    /// The six planes in fixed {top, bottom, left, right, near, far} order.
    pub fn planes(&self) -> [&Plane; 6] {
        [
            &self.top,
            &self.bottom,
            &self.left,
            &self.right,
            &self.near,
            &self.far,
        ]
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// Standard p-vertex/n-vertex optimization, O(6) plane evaluations
    /// instead of 8 corners per plane:
    /// - p-vertex (corner most aligned with the plane normal, `>= 0`
    ///   component picks max) outside any plane → `Outside`, short-circuit
    /// - n-vertex (complementary corner) outside some plane → at least
    ///   `Intersect`, but remaining planes may still prove `Outside`
    /// - neither ever triggers → `Inside`
    ///
    /// This is the per-object, per-frame hot path.
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut result = FrustumTest::Inside;

        for plane in self.planes() {
            let n = plane.normal;

            let p_vertex = Vec3::new(
                if n.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if n.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if n.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            if plane.distance_to_point(p_vertex) < 0.0 {
                return FrustumTest::Outside;
            }

            let n_vertex = Vec3::new(
                if n.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if n.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if n.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );
            if plane.distance_to_point(n_vertex) < 0.0 {
                result = FrustumTest::Intersect;
            }
        }

        result
    }

    /// Conservative boolean test: `true` unless the AABB is fully outside.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.classify_aabb(aabb) != FrustumTest::Outside
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
