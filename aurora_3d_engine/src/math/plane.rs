/// Plane, a half-space with signed-distance queries.
///
/// Satisfies `dot(normal, p) + distance == 0` for points on the plane.
/// The positive side of the plane (`distance_to_point > 0`) is the
/// "inside" for frustum semantics.

use glam::Vec3;

/// A half-space: unit normal plus signed distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing toward the positive side
    pub normal: Vec3,
    /// Signed distance from the origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a unit normal and signed distance.
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Build a plane through three ordered points.
    ///
    /// The normal is `normalize(cross(p2 - p1, p3 - p1))`, so the winding
    /// of the points determines which side is positive.
    ///
    /// Precondition: the points must not be colinear. Colinear input gives
    /// a zero-length cross product and the normalized result is NaN, which
    /// propagates through every subsequent distance query. Not guarded:
    /// this is a caller/configuration error, not a runtime condition.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalize();
        Self {
            normal,
            distance: -normal.dot(p1),
        }
    }

    /// Signed distance from a point to this plane.
    ///
    /// Positive on the normal's side, negative behind, zero on the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
