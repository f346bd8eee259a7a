//! Unit tests for frustum.rs
//!
//! Tests plane extraction from camera geometry and AABB classification.

use glam::Vec3;
use crate::math::AABB;
use super::*;

/// Canonical camera: origin, looking down -Z, 45 degree vertical FOV,
/// square aspect, near 0.1, far 1000.
fn canonical_frustum() -> Frustum {
    Frustum::from_camera(
        Vec3::ZERO,
        Vec3::X,
        Vec3::Y,
        Vec3::new(0.0, 0.0, -1.0),
        std::f32::consts::FRAC_PI_4,
        1.0,
        0.1,
        1000.0,
    )
}

// ============================================================================
// PLANE GEOMETRY
// ============================================================================

#[test]
fn test_planes_are_unit_length() {
    let frustum = canonical_frustum();
    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_planes_order_is_fixed() {
    let frustum = canonical_frustum();
    let planes = frustum.planes();
    assert_eq!(planes[0].normal, frustum.top.normal);
    assert_eq!(planes[1].normal, frustum.bottom.normal);
    assert_eq!(planes[2].normal, frustum.left.normal);
    assert_eq!(planes[3].normal, frustum.right.normal);
    assert_eq!(planes[4].normal, frustum.near.normal);
    assert_eq!(planes[5].normal, frustum.far.normal);
}

#[test]
fn test_near_far_planes_face_each_other() {
    let frustum = canonical_frustum();

    // Near plane: inward normal -Z, passes through z = -0.1
    assert!((frustum.near.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    assert!((frustum.near.distance + 0.1).abs() < 1e-5);

    // Far plane: inward normal +Z, passes through z = -1000
    assert!((frustum.far.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-3);
    assert!((frustum.far.distance - 1000.0).abs() < 0.5);
}

#[test]
fn test_all_normals_point_inward() {
    // A point midway down the view axis is inside the volume, so every
    // signed distance to it must be positive.
    let frustum = canonical_frustum();
    let inside = Vec3::new(0.0, 0.0, -500.0);
    for plane in frustum.planes() {
        assert!(
            plane.distance_to_point(inside) > 0.0,
            "plane with normal {:?} faces outward",
            plane.normal
        );
    }
}

#[test]
fn test_inward_normals_with_moved_rotated_camera() {
    // Camera at (10, 5, 3) yawed 90 degrees: forward -X, right -Z
    let position = Vec3::new(10.0, 5.0, 3.0);
    let frustum = Frustum::from_camera(
        position,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        Vec3::new(-1.0, 0.0, 0.0),
        std::f32::consts::FRAC_PI_4,
        16.0 / 9.0,
        0.5,
        200.0,
    );

    let inside = position + Vec3::new(-1.0, 0.0, 0.0) * 100.0;
    for plane in frustum.planes() {
        assert!(plane.distance_to_point(inside) > 0.0);
    }
}

// ============================================================================
// AABB CLASSIFICATION
// ============================================================================

#[test]
fn test_box_ahead_of_camera_is_inside() {
    // Unit cube centered at (0, 0, -5), well within the 45 degree cone
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(-0.5, -0.5, -5.5), Vec3::new(0.5, 0.5, -4.5));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Inside);
    assert!(frustum.intersects_aabb(&aabb));
}

#[test]
fn test_box_behind_camera_is_outside() {
    // Same cube mirrored to +Z, behind the near plane
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(-0.5, -0.5, 4.5), Vec3::new(0.5, 0.5, 5.5));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_box_straddling_near_plane_intersects() {
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(-0.5, -0.5, -1.0), Vec3::new(0.5, 0.5, 1.0));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Intersect);
    assert!(frustum.intersects_aabb(&aabb));
}

#[test]
fn test_box_straddling_side_plane_intersects() {
    // At z = -10 the half-width of the cone is about 4.14; a box spanning
    // x in [3, 6] pokes through the right plane.
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(3.0, -0.5, -10.5), Vec3::new(6.0, 0.5, -9.5));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Intersect);
}

#[test]
fn test_box_far_to_the_side_is_outside() {
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(50.0, -0.5, -10.5), Vec3::new(51.0, 0.5, -9.5));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_box_beyond_far_plane_is_outside() {
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1200.0), Vec3::new(1.0, 1.0, -1100.0));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_box_containing_camera_is_never_outside() {
    // The apex lies on the four side planes, so a box around the camera
    // position cannot be rejected.
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));

    assert_ne!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
    assert!(frustum.intersects_aabb(&aabb));
}

#[test]
fn test_box_enclosing_whole_frustum_intersects() {
    let frustum = canonical_frustum();
    let aabb = AABB::new(Vec3::splat(-5000.0), Vec3::splat(5000.0));

    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Intersect);
}
