/// Space-filling search — breadth-first flood fill over a lattice of
/// candidate probe positions.
///
/// Starting from the probe's current position, the search walks a
/// regular grid (step 2 in the probe's local axis units), keeping every
/// lattice point where the probe both fits the domain volumes and
/// clears the scene collision geometry. Accepted points become candidate
/// camera locations for the sampler.
///
/// Termination requires a bounded in-domain region: the visited set
/// only grows, so the walk ends once the frontier drains, but an
/// unbounded domain never drains it. Bounding the domains is the
/// caller's responsibility.

use glam::{IVec3, Vec3};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::autoview_info;
use crate::collision::{CollisionWorld, TriMesh};
use crate::geom::DomainSet;

/// Lattice spacing in the probe's local axis units.
pub const LATTICE_STEP: i32 = 2;

/// Outcome of a flood-fill survey.
#[derive(Debug, Clone, Default)]
pub struct FloodResult {
    /// Accepted world-space positions, in BFS discovery order
    pub candidates: Vec<Vec3>,
    /// World-space offsets of accepted points relative to the probe
    /// origin; only filled when marker emission is requested
    pub markers: Vec<Vec3>,
    /// Total lattice points examined (accepted or not)
    pub visited: usize,
}

/// Flood the domain volumes with candidate probe positions.
///
/// The lattice origin `(0, 0, 0)` is the probe's current position; the
/// origin itself is only examined if the walk returns to it through a
/// neighbor. Each popped frontier point expands to its 6 axis
/// neighbors; a neighbor is recorded as a candidate (and expanded
/// further) only if the probe's bounding corners fit some domain volume
/// at that offset and the probe's mesh clears the scene.
pub fn flood_fill(
    probe: &TriMesh,
    domains: &DomainSet,
    collision: &CollisionWorld,
    emit_markers: bool,
) -> FloodResult {
    let corners = probe.world_bound_corners();
    let basis = probe.rotation_scale();
    let origin = probe.origin();

    let mut result = FloodResult::default();
    let mut visited: FxHashSet<IVec3> = FxHashSet::default();
    let mut frontier: VecDeque<IVec3> = VecDeque::new();
    frontier.push_back(IVec3::ZERO);

    while let Some(coords) = frontier.pop_front() {
        for axis in 0..3 {
            for step in [LATTICE_STEP, -LATTICE_STEP] {
                let mut neighbor = coords;
                neighbor[axis] += step;
                if !visited.insert(neighbor) {
                    continue;
                }

                // Lattice coordinate -> world-space offset through the
                // probe's rotation/scale basis
                let delta = basis * neighbor.as_vec3();
                if !domains.contains_probe(&corners, delta) {
                    continue;
                }
                if collision.intersects(probe, delta) {
                    // In-domain but blocked: stays visited, not expanded
                    continue;
                }

                frontier.push_back(neighbor);
                result.candidates.push(origin + delta);
                if emit_markers {
                    result.markers.push(delta);
                }
            }
        }
    }

    result.visited = visited.len();
    autoview_info!(
        "autoview::Survey",
        "{} possible locations ({} lattice points examined)",
        result.candidates.len(),
        result.visited
    );
    result
}

#[cfg(test)]
#[path = "flood_tests.rs"]
mod tests;
