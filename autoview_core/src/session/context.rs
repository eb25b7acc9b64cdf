/// Generation session — one explicit context object instead of
/// module-level caches.
///
/// The session owns everything an action needs: scene collision meshes,
/// domain volumes, the probe and camera rig, the candidate set from the
/// last survey, the viewpoint store, the verified-pose cache, the
/// configuration and the seeded RNG. Actions borrow it mutably for
/// their duration; nothing survives outside it.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{CollisionWorld, TriMesh};
use crate::config::AutoviewConfig;
use crate::error::{AutoviewError, AutoviewResult};
use crate::geom::{DomainSet, Pose};
use crate::store::{VerifiedSet, ViewpointKey, ViewpointStore};
use crate::verify::VisibilityOracle;

pub struct Session {
    /// Scene collision meshes; fed to [`CollisionWorld::rebuild`]
    pub scene: Vec<TriMesh>,
    /// Valid-placement volumes
    pub domains: DomainSet,
    /// Footprint mesh tested by the survey
    pub probe: Option<TriMesh>,
    /// Mesh placed at each pose for verification collision tests
    pub camera_rig: Option<TriMesh>,
    /// Base orientation added to every sampled perturbation (radians)
    pub base_rotation: Vec3,
    pub collision: CollisionWorld,
    /// Survey output, in discovery order
    pub candidates: Vec<Vec3>,
    /// Visualization offsets from the last survey
    pub markers: Vec<Vec3>,
    pub viewpoints: ViewpointStore,
    pub verified: VerifiedSet,
    /// Keys the next selection-driven action operates on
    pub selection: Vec<ViewpointKey>,
    pub config: AutoviewConfig,
    pub rng: StdRng,
    /// Visibility oracle; local renderer or remote delegate
    pub oracle: Option<Box<dyn VisibilityOracle>>,
}

impl Session {
    pub fn new(config: AutoviewConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            scene: Vec::new(),
            domains: DomainSet::new(),
            probe: None,
            camera_rig: None,
            base_rotation: Vec3::ZERO,
            collision: CollisionWorld::new(),
            candidates: Vec::new(),
            markers: Vec::new(),
            viewpoints: ViewpointStore::new(),
            verified: VerifiedSet::new(),
            selection: Vec::new(),
            config,
            rng,
            oracle: None,
        }
    }

    /// Rebuild the collision trees from the current scene meshes.
    pub fn rebuild_collision(&mut self) {
        self.collision.rebuild(&self.scene);
    }

    /// Install the built-in camera indicator as the verification rig.
    pub fn install_default_rig(&mut self) {
        self.camera_rig = Some(TriMesh::camera_indicator());
    }

    pub fn set_oracle(&mut self, oracle: Box<dyn VisibilityOracle>) {
        self.oracle = Some(oracle);
    }

    /// Poses of the current selection, in selection order.
    pub fn selection_poses(&self) -> AutoviewResult<Vec<Pose>> {
        self.selection
            .iter()
            .map(|&key| {
                self.viewpoints.get(key).map(|v| v.pose).ok_or_else(|| {
                    AutoviewError::MissingReference(
                        "selected viewpoint no longer exists".to_string(),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
