use glam::Vec3;
use super::*;
use crate::collision::TriMesh;
use crate::config::AutoviewConfig;
use crate::error::{AutoviewError, AutoviewResult};
use crate::geom::Pose;
use crate::session::Session;
use crate::verify::VisibilityOracle;

struct FixedOracle(bool);

impl VisibilityOracle for FixedOracle {
    fn visibility(&mut self, poses: &[Pose], _min: f32) -> AutoviewResult<Vec<bool>> {
        Ok(vec![self.0; poses.len()])
    }
}

fn session_with_candidates(count: usize) -> Session {
    let mut session = Session::new(AutoviewConfig::default());
    for i in 0..count {
        session.candidates.push(Vec3::new(i as f32 * 10.0, 0.0, 0.0));
    }
    session
}

fn positions(session: &Session) -> Vec<Vec3> {
    session
        .viewpoints
        .top_level_ordered()
        .map(|(_, v)| v.pose.position)
        .collect()
}

// ============================================================================
// Unchecked sampling
// ============================================================================

#[test]
fn test_sampling_is_deterministic_under_reset() {
    let mut session = session_with_candidates(20);
    sample_views(&mut session, 5, true, false).unwrap();
    let first = positions(&session);

    sample_views(&mut session, 5, true, false).unwrap();
    let second = positions(&session);

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_positions_come_from_candidate_set() {
    let mut session = session_with_candidates(8);
    sample_views(&mut session, 20, true, false).unwrap();
    for position in positions(&session) {
        assert!(session.candidates.contains(&position));
    }
}

#[test]
fn test_rotation_stays_within_configured_ranges() {
    let mut session = session_with_candidates(4);
    session.base_rotation = Vec3::new(0.0, 0.5, 0.0);
    sample_views(&mut session, 30, true, false).unwrap();

    let pitch_max = 20.0f32.to_radians();
    for (_, view) in session.viewpoints.top_level_ordered() {
        let rotation = view.pose.rotation;
        assert!(rotation.x.abs() <= pitch_max + 1e-5);
        // Roll range is [0, 0]: only the base rotation remains
        assert_eq!(rotation.y, 0.5);
        assert!(rotation.z.abs() <= std::f32::consts::PI + 1e-5);
    }
}

#[test]
fn test_append_without_reset() {
    let mut session = session_with_candidates(4);
    sample_views(&mut session, 3, true, false).unwrap();
    sample_views(&mut session, 2, false, false).unwrap();
    assert_eq!(session.viewpoints.len(), 5);
}

#[test]
fn test_empty_candidate_set_fails() {
    let mut session = Session::new(AutoviewConfig::default());
    let result = sample_views(&mut session, 1, true, false);
    assert_eq!(result, Err(AutoviewError::EmptyCandidateSet));
}

// ============================================================================
// Checked sampling
// ============================================================================

#[test]
fn test_checked_sampling_records_verified_poses() {
    let mut session = session_with_candidates(4);
    session.camera_rig = Some(TriMesh::cuboid(Vec3::ZERO, Vec3::splat(0.5)));
    session.set_oracle(Box::new(FixedOracle(true)));

    sample_views(&mut session, 3, true, true).unwrap();
    assert_eq!(session.viewpoints.len(), 3);
    for (_, view) in session.viewpoints.top_level_ordered() {
        assert!(session.verified.contains(&view.pose));
    }
}

#[test]
fn test_attempt_budget_exhaustion() {
    let mut session = session_with_candidates(4);
    session.config.max_attempts = 3;
    session.camera_rig = Some(TriMesh::cuboid(Vec3::ZERO, Vec3::splat(0.5)));
    session.set_oracle(Box::new(FixedOracle(false)));

    let result = sample_views(&mut session, 1, true, true);
    assert_eq!(result, Err(AutoviewError::PlacementExhausted(3)));
    assert!(session.viewpoints.is_empty());
}

#[test]
fn test_checked_sampling_requires_camera_rig() {
    let mut session = session_with_candidates(4);
    session.set_oracle(Box::new(FixedOracle(true)));
    let result = sample_views(&mut session, 1, true, true);
    assert!(matches!(result, Err(AutoviewError::MissingReference(_))));
}

#[test]
fn test_checked_sampling_requires_oracle() {
    let mut session = session_with_candidates(4);
    session.camera_rig = Some(TriMesh::cuboid(Vec3::ZERO, Vec3::splat(0.5)));
    let result = sample_views(&mut session, 1, true, true);
    assert!(matches!(result, Err(AutoviewError::MissingReference(_))));
}
