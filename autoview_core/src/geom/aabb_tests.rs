use glam::{Mat4, Vec3};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_points_bounds_all_inputs() {
    let aabb = Aabb::from_points(&[
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-1.0, 4.0, 0.5),
        Vec3::new(0.0, 0.0, -3.0),
    ]);
    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 3.0));
}

#[test]
fn test_corners_count_and_extremes() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(2.0));
    let corners = aabb.corners();
    assert_eq!(corners.len(), 8);
    assert!(corners.contains(&Vec3::splat(-1.0)));
    assert!(corners.contains(&Vec3::splat(2.0)));

    // Re-bounding the corners reproduces the box
    let rebuilt = Aabb::from_points(&corners);
    assert_eq!(rebuilt, aabb);
}

// ============================================================================
// Transform (Arvo)
// ============================================================================

#[test]
fn test_transformed_by_translation() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, -2.0)));
    assert_eq!(moved.min, Vec3::new(4.0, -1.0, -3.0));
    assert_eq!(moved.max, Vec3::new(6.0, 1.0, -1.0));
}

#[test]
fn test_transformed_by_rotation_stays_tight() {
    // 90° around Z maps the (2,1,1)-extent box onto a (1,2,1) extent
    let aabb = Aabb::new(Vec3::new(-2.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
    let rotated = aabb.transformed(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));
    assert!((rotated.extent() - Vec3::new(2.0, 4.0, 2.0)).abs().max_element() < 1e-5);
}

// ============================================================================
// Containment / overlap
// ============================================================================

#[test]
fn test_contains_nested_box() {
    let outer = Aabb::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let inner = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn test_intersects_overlapping_and_separated() {
    let a = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
    let b = Aabb::new(Vec3::splat(1.0), Vec3::splat(3.0));
    let c = Aabb::new(Vec3::splat(5.0), Vec3::splat(6.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
}

#[test]
fn test_intersects_touching_boxes() {
    // Shared face counts as intersecting
    let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.intersects(&b));
}

// ============================================================================
// Ray slab test
// ============================================================================

#[test]
fn test_ray_hits_box_ahead() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let origin = Vec3::new(-5.0, 0.0, 0.0);
    let dir = Vec3::X;
    let inv = dir.recip();
    assert!(aabb.intersects_ray(origin, inv, 10.0));
    // Segment too short to reach the box
    assert!(!aabb.intersects_ray(origin, inv, 2.0));
}

#[test]
fn test_ray_misses_box_behind() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let origin = Vec3::new(5.0, 0.0, 0.0);
    let inv = Vec3::X.recip();
    assert!(!aabb.intersects_ray(origin, inv, 100.0));
}

#[test]
fn test_ray_from_inside_hits() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let inv = Vec3::Y.recip();
    assert!(aabb.intersects_ray(Vec3::ZERO, inv, 0.5));
}
