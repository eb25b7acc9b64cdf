/// Triangle mesh with a local-to-world transform.
///
/// Simple vertex/index representation; all collision and domain queries
/// work on the world-space triangles or on the world-transformed corners
/// of the local bounding box.

use glam::{Mat3, Mat4, Vec3};
use crate::geom::Aabb;

/// An indexed triangle mesh positioned in the world.
#[derive(Debug, Clone)]
pub struct TriMesh {
    /// Vertex positions in local space
    pub positions: Vec<Vec3>,
    /// Triangle vertex indices (CCW winding)
    pub indices: Vec<[u32; 3]>,
    /// Local-to-world transform
    pub transform: Mat4,
}

impl TriMesh {
    /// Create a mesh at the world origin.
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            indices,
            transform: Mat4::IDENTITY,
        }
    }

    /// Set the local-to-world transform (builder style).
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Axis-aligned box mesh (12 triangles) centered on `center` with
    /// the given half extents, in local space.
    pub fn cuboid(center: Vec3, half: Vec3) -> Self {
        let positions = Aabb::new(center - half, center + half).corners().to_vec();
        // Corner order from Aabb::corners: bit 0 = +x, bit 1 = +y, bit 2 = +z
        let indices = vec![
            [0, 2, 3], [0, 3, 1], // -z face
            [4, 5, 7], [4, 7, 6], // +z face
            [0, 4, 6], [0, 6, 2], // -x face
            [1, 3, 7], [1, 7, 5], // +x face
            [0, 1, 5], [0, 5, 4], // -y face
            [2, 6, 7], [2, 7, 3], // +y face
        ];
        Self::new(positions, indices)
    }

    /// The default camera-rig indicator geometry: a five-vertex frustum
    /// pyramid (apex forward), matching the wireframe marker used to
    /// visualize viewpoints.
    pub fn camera_indicator() -> Self {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.2),
            Vec3::new(1.0, -0.5, -2.0),
            Vec3::new(1.0, 0.5, -2.0),
            Vec3::new(-1.0, -0.5, -2.0),
            Vec3::new(-1.0, 0.5, -2.0),
        ];
        let indices = vec![
            [0, 1, 2],
            [0, 2, 4],
            [0, 3, 1],
            [0, 4, 3],
            [1, 3, 2],
            [2, 3, 4],
        ];
        Self::new(positions, indices)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// World-space position of the mesh origin.
    pub fn origin(&self) -> Vec3 {
        self.transform.col(3).truncate()
    }

    /// Rotation/scale part of the transform (no translation).
    pub fn rotation_scale(&self) -> Mat3 {
        Mat3::from_mat4(self.transform)
    }

    /// Bounding box of the vertices in local space.
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// The 8 corners of the local bounding box, transformed to world
    /// space (not re-bounded: the corners stay corners, as the domain
    /// membership test requires).
    pub fn world_bound_corners(&self) -> [Vec3; 8] {
        let corners = self.local_bounds().corners();
        corners.map(|c| self.transform.transform_point3(c))
    }

    /// One triangle in world space, optionally shifted by `offset`.
    pub fn world_triangle(&self, index: usize, offset: Vec3) -> [Vec3; 3] {
        let [a, b, c] = self.indices[index];
        [
            self.transform.transform_point3(self.positions[a as usize]) + offset,
            self.transform.transform_point3(self.positions[b as usize]) + offset,
            self.transform.transform_point3(self.positions[c as usize]) + offset,
        ]
    }

    /// All world-space triangles shifted by `offset`.
    pub fn world_triangles(&self, offset: Vec3) -> Vec<[Vec3; 3]> {
        (0..self.indices.len())
            .map(|i| self.world_triangle(i, offset))
            .collect()
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
