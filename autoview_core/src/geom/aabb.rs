/// Axis-Aligned Bounding Box in local space
///
/// The probe's footprint and all BVH node bounds are AABBs. Stored as
/// min/max corners; world-space queries transform the box (or its
/// corners) through the owning object's matrix.

use glam::{Mat4, Vec3};

/// Axis-aligned box spanning `min..=max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Empty box (inverted bounds); expanding it with any point fixes it up.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing all `points`.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand_point(*p);
        }
        aabb
    }

    /// Grow the box to include `point`.
    pub fn expand_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box to include `other`.
    pub fn expand(&mut self, other: &Aabb) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Box center.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis extent (max - min).
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// The 8 corner points, in xyz bit order (bit 0 = x max, etc.).
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Returns `true` if the two AABBs overlap or touch.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Test a ray segment against the box (slab method).
    ///
    /// `inv_direction` is the per-component reciprocal of the ray
    /// direction (infinite where the direction is zero). Returns `true`
    /// if the segment `[0, max_distance]` clips the box.
    pub fn intersects_ray(&self, origin: Vec3, inv_direction: Vec3, max_distance: f32) -> bool {
        let t1 = (self.min - origin) * inv_direction;
        let t2 = (self.max - origin) * inv_direction;

        let t_min = t1.min(t2).max_element().max(0.0);
        let t_max = t1.max(t2).min_element().min(max_distance);

        t_min <= t_max
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
