/// Scene-level collision oracle.
///
/// Owns one BVH per scene collision mesh. The owner (the session)
/// rebuilds the list whenever scene membership or transforms may have
/// changed — the survey and both sampler paths rebuild at entry — so
/// queries never observe stale geometry.

use glam::Vec3;
use crate::autoview_debug;
use super::bvh::Bvh;
use super::mesh::TriMesh;

/// Collision trees for the current scene geometry.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    trees: Vec<Bvh>,
}

impl CollisionWorld {
    /// Empty world (no collision geometry).
    pub fn new() -> Self {
        Self { trees: Vec::new() }
    }

    /// Rebuild every tree from the given scene meshes.
    ///
    /// Meshes without triangles are skipped.
    pub fn rebuild(&mut self, scene: &[TriMesh]) {
        self.trees = scene
            .iter()
            .filter(|m| m.triangle_count() > 0)
            .map(|m| Bvh::from_mesh(m, Vec3::ZERO))
            .collect();
        autoview_debug!(
            "autoview::CollisionWorld",
            "rebuilt {} collision trees",
            self.trees.len()
        );
    }

    /// Number of collision trees.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// True when no collision geometry is loaded.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Does the probe, shifted by `offset`, cross any scene surface?
    ///
    /// Returns on the first intersecting tree.
    pub fn intersects(&self, probe: &TriMesh, offset: Vec3) -> bool {
        if self.trees.is_empty() {
            return false;
        }
        let probe_bvh = Bvh::from_mesh(probe, offset);
        self.trees.iter().any(|tree| probe_bvh.overlaps(tree))
    }

    /// Does the segment `[origin, origin + direction * max_distance]`
    /// hit any scene surface? `direction` must be normalized.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self.trees
            .iter()
            .any(|tree| tree.raycast(origin, direction, max_distance))
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
