/// Accept/reject pipeline for candidate poses.
///
/// A pose is accepted when it is both collision-free (the camera rig at
/// that pose does not cross scene geometry) and sufficiently visible
/// (the oracle's verdict). Accepted poses enter the verified cache,
/// rejected poses leave it, so re-verification converges instead of
/// accumulating stale entries.

use glam::Vec3;

use crate::autoview_info;
use crate::collision::{CollisionWorld, TriMesh};
use crate::error::AutoviewResult;
use crate::geom::Pose;
use crate::store::VerifiedSet;
use super::oracle::VisibilityOracle;

/// Verify a batch of poses. Returns true only when every pose in the
/// batch was accepted.
///
/// One oracle round trip covers the whole batch; collision is checked
/// per pose with the camera rig placed at that pose.
pub fn verify_batch(
    oracle: &mut dyn VisibilityOracle,
    collision: &CollisionWorld,
    camera_rig: &TriMesh,
    verified: &mut VerifiedSet,
    poses: &[Pose],
    min_foreground: f32,
) -> AutoviewResult<bool> {
    if poses.is_empty() {
        return Ok(true);
    }

    let visible = oracle.visibility(poses, min_foreground)?;
    debug_assert_eq!(visible.len(), poses.len());

    let mut accepted = 0usize;
    let mut all_accepted = true;
    for (pose, &is_visible) in poses.iter().zip(visible.iter()) {
        let rig = camera_rig.clone().with_transform(pose.matrix());
        let collides = collision.intersects(&rig, Vec3::ZERO);
        let accept = is_visible && !collides;

        if accept {
            verified.insert(pose);
            accepted += 1;
        } else {
            verified.remove(pose);
            all_accepted = false;
        }
    }

    autoview_info!(
        "autoview::Verify",
        "verified {}/{} poses (threshold {:.1}%)",
        accepted,
        poses.len(),
        min_foreground
    );
    Ok(all_accepted)
}

#[cfg(test)]
#[path = "verifier_tests.rs"]
mod tests;
