/// Bounding-volume tree over world-space triangles.
///
/// Median-split build: nodes split their triangle range at the median
/// centroid along the longest axis until ranges fit in a leaf. Queries
/// are boolean only — overlap against another tree and segment raycast —
/// both returning on first hit.

use glam::Vec3;
use crate::geom::Aabb;
use super::mesh::TriMesh;

/// Triangles per leaf before a range stops splitting
const LEAF_SIZE: usize = 4;

/// Degenerate-geometry guard for ray/triangle and edge tests
const EPSILON: f32 = 1e-7;

#[derive(Debug, Clone)]
struct BvhNode {
    /// Bounds of every triangle under this node
    bounds: Aabb,
    /// Child node indices (internal nodes only)
    left: u32,
    right: u32,
    /// First triangle of the leaf range
    start: u32,
    /// Leaf triangle count; 0 marks an internal node
    count: u32,
}

impl BvhNode {
    fn is_leaf(&self) -> bool {
        self.count > 0
    }
}

/// A static BVH over a triangle soup.
#[derive(Debug, Clone)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    /// Triangles reordered so each leaf owns a contiguous range
    triangles: Vec<[Vec3; 3]>,
}

impl Bvh {
    /// Build a tree over world-space triangles.
    pub fn build(triangles: Vec<[Vec3; 3]>) -> Self {
        if triangles.is_empty() {
            return Self {
                nodes: Vec::new(),
                triangles,
            };
        }

        let centroids: Vec<Vec3> = triangles
            .iter()
            .map(|t| (t[0] + t[1] + t[2]) / 3.0)
            .collect();
        let mut builder = Builder {
            triangles: &triangles,
            centroids,
            order: (0..triangles.len() as u32).collect(),
            nodes: Vec::new(),
        };
        builder.build_range(0, triangles.len());

        let ordered = builder
            .order
            .iter()
            .map(|&i| triangles[i as usize])
            .collect();
        Self {
            nodes: builder.nodes,
            triangles: ordered,
        }
    }

    /// Build from a mesh's world-space triangles shifted by `offset`.
    pub fn from_mesh(mesh: &TriMesh, offset: Vec3) -> Self {
        Self::build(mesh.world_triangles(offset))
    }

    /// True when the tree holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of triangles in the tree.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Bounds of the whole tree, if non-empty.
    pub fn bounds(&self) -> Option<Aabb> {
        self.nodes.first().map(|n| n.bounds)
    }

    /// Surface-intersection test against another tree.
    ///
    /// Dual traversal pruned by node bounds; leaf pairs run the
    /// triangle/triangle narrow phase. Returns on the first crossing
    /// pair. Surfaces that nest without touching do not intersect.
    pub fn overlaps(&self, other: &Bvh) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let mut stack: Vec<(u32, u32)> = vec![(0, 0)];
        while let Some((ai, bi)) = stack.pop() {
            let a = &self.nodes[ai as usize];
            let b = &other.nodes[bi as usize];
            if !a.bounds.intersects(&b.bounds) {
                continue;
            }

            match (a.is_leaf(), b.is_leaf()) {
                (true, true) => {
                    for ta in self.leaf_triangles(a) {
                        for tb in other.leaf_triangles(b) {
                            if triangles_intersect(ta, tb) {
                                return true;
                            }
                        }
                    }
                }
                (true, false) => {
                    stack.push((ai, b.left));
                    stack.push((ai, b.right));
                }
                // Descend the left tree first when both are internal
                (false, _) => {
                    stack.push((a.left, bi));
                    stack.push((a.right, bi));
                }
            }
        }
        false
    }

    /// Segment raycast: does `[origin, origin + direction * max_distance]`
    /// hit any triangle? `direction` must be normalized.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        if self.is_empty() {
            return false;
        }

        let inv_direction = direction.recip();
        let mut stack: Vec<u32> = vec![0];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            if !node.bounds.intersects_ray(origin, inv_direction, max_distance) {
                continue;
            }
            if node.is_leaf() {
                for tri in self.leaf_triangles(node) {
                    if let Some(t) = ray_triangle_intersect(origin, direction, tri) {
                        if t <= max_distance {
                            return true;
                        }
                    }
                }
            } else {
                stack.push(node.left);
                stack.push(node.right);
            }
        }
        false
    }

    fn leaf_triangles<'a>(&'a self, node: &BvhNode) -> impl Iterator<Item = &'a [Vec3; 3]> + 'a {
        let start = node.start as usize;
        self.triangles[start..start + node.count as usize].iter()
    }
}

// ===== BUILD =====

struct Builder<'a> {
    triangles: &'a [[Vec3; 3]],
    centroids: Vec<Vec3>,
    /// Triangle permutation being partitioned into leaf ranges
    order: Vec<u32>,
    nodes: Vec<BvhNode>,
}

impl Builder<'_> {
    /// Build the node covering `order[start..end]`; returns its index.
    fn build_range(&mut self, start: usize, end: usize) -> u32 {
        let node_index = self.nodes.len() as u32;
        let mut bounds = Aabb::empty();
        for &t in &self.order[start..end] {
            bounds.expand(&triangle_aabb(&self.triangles[t as usize]));
        }
        self.nodes.push(BvhNode {
            bounds,
            left: 0,
            right: 0,
            start: start as u32,
            count: 0,
        });

        let count = end - start;
        if count <= LEAF_SIZE {
            self.nodes[node_index as usize].count = count as u32;
            return node_index;
        }

        // Split at the median centroid along the widest centroid axis
        let mut centroid_bounds = Aabb::empty();
        for &t in &self.order[start..end] {
            centroid_bounds.expand_point(self.centroids[t as usize]);
        }
        let extent = centroid_bounds.extent();
        let axis = if extent.x >= extent.y && extent.x >= extent.z {
            0
        } else if extent.y >= extent.z {
            1
        } else {
            2
        };

        let mid = start + count / 2;
        let centroids = &self.centroids;
        self.order[start..end].select_nth_unstable_by(count / 2, |&a, &b| {
            centroids[a as usize][axis]
                .partial_cmp(&centroids[b as usize][axis])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let left = self.build_range(start, mid);
        let right = self.build_range(mid, end);
        self.nodes[node_index as usize].left = left;
        self.nodes[node_index as usize].right = right;
        node_index
    }
}

fn triangle_aabb(tri: &[Vec3; 3]) -> Aabb {
    Aabb::from_points(tri)
}

// ===== NARROW PHASE =====

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns the hit distance along `direction` (which must be normalized),
/// or `None` for a miss or a parallel ray.
pub fn ray_triangle_intersect(origin: Vec3, direction: Vec3, tri: &[Vec3; 3]) -> Option<f32> {
    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];

    let h = direction.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < EPSILON {
        return None; // Ray parallel to triangle
    }

    let f = 1.0 / a;
    let s = origin - tri[0];
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Triangle/triangle surface crossing.
///
/// Two (non-coplanar) triangles intersect exactly when an edge of one
/// pierces the face of the other; both directions are tested.
fn triangles_intersect(a: &[Vec3; 3], b: &[Vec3; 3]) -> bool {
    edges_pierce(a, b) || edges_pierce(b, a)
}

fn edges_pierce(edges_of: &[Vec3; 3], face: &[Vec3; 3]) -> bool {
    for i in 0..3 {
        let p = edges_of[i];
        let q = edges_of[(i + 1) % 3];
        let d = q - p;
        let len = d.length();
        if len <= EPSILON {
            continue; // degenerate edge
        }
        if let Some(t) = ray_triangle_intersect(p, d / len, face) {
            if t <= len {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
