use glam::{Mat4, Vec3};
use super::*;
use crate::collision::{CollisionWorld, TriMesh};
use crate::geom::Pose;
use crate::store::VerifiedSet;
use crate::verify::VisibilityOracle;

/// Oracle with scripted verdicts, one per pose.
struct ScriptedOracle {
    verdicts: Vec<bool>,
}

impl VisibilityOracle for ScriptedOracle {
    fn visibility(&mut self, poses: &[Pose], _min: f32) -> crate::AutoviewResult<Vec<bool>> {
        assert_eq!(poses.len(), self.verdicts.len());
        Ok(self.verdicts.clone())
    }
}

fn rig() -> TriMesh {
    TriMesh::cuboid(Vec3::ZERO, Vec3::splat(0.5))
}

fn pose_at(x: f32) -> Pose {
    Pose::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO)
}

// ============================================================================
// Accept / reject
// ============================================================================

#[test]
fn test_all_visible_collision_free_accepts() {
    let mut oracle = ScriptedOracle {
        verdicts: vec![true, true],
    };
    let mut verified = VerifiedSet::new();
    let poses = [pose_at(0.0), pose_at(5.0)];

    let ok = verify_batch(
        &mut oracle,
        &CollisionWorld::new(),
        &rig(),
        &mut verified,
        &poses,
        15.0,
    )
    .unwrap();

    assert!(ok);
    assert_eq!(verified.len(), 2);
    assert!(verified.contains(&poses[0]));
    assert!(verified.contains(&poses[1]));
}

#[test]
fn test_invisible_pose_rejects_batch() {
    let mut oracle = ScriptedOracle {
        verdicts: vec![true, false],
    };
    let mut verified = VerifiedSet::new();
    let poses = [pose_at(0.0), pose_at(5.0)];

    let ok = verify_batch(
        &mut oracle,
        &CollisionWorld::new(),
        &rig(),
        &mut verified,
        &poses,
        15.0,
    )
    .unwrap();

    assert!(!ok);
    assert!(verified.contains(&poses[0]));
    assert!(!verified.contains(&poses[1]));
}

#[test]
fn test_colliding_pose_rejected_despite_visibility() {
    let mut oracle = ScriptedOracle {
        verdicts: vec![true],
    };
    let mut collision = CollisionWorld::new();
    // Wall crossing the rig at the origin
    collision.rebuild(&[TriMesh::cuboid(Vec3::ZERO, Vec3::new(0.1, 5.0, 5.0))]);
    let mut verified = VerifiedSet::new();
    let poses = [pose_at(0.0)];

    let ok = verify_batch(
        &mut oracle,
        &collision,
        &rig(),
        &mut verified,
        &poses,
        15.0,
    )
    .unwrap();

    assert!(!ok);
    assert!(verified.is_empty());
}

#[test]
fn test_rig_placed_at_pose_for_collision() {
    let mut oracle = ScriptedOracle {
        verdicts: vec![true],
    };
    let mut collision = CollisionWorld::new();
    collision.rebuild(&[TriMesh::cuboid(Vec3::ZERO, Vec3::new(0.1, 5.0, 5.0))
        .with_transform(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)))]);
    let mut verified = VerifiedSet::new();

    // Pose well clear of the wall: accepted
    let ok = verify_batch(
        &mut oracle,
        &collision,
        &rig(),
        &mut verified,
        &[pose_at(0.0)],
        15.0,
    )
    .unwrap();
    assert!(ok);

    // Pose moved onto the wall: rejected
    let mut oracle = ScriptedOracle {
        verdicts: vec![true],
    };
    let ok = verify_batch(
        &mut oracle,
        &collision,
        &rig(),
        &mut verified,
        &[pose_at(10.0)],
        15.0,
    )
    .unwrap();
    assert!(!ok);
}

// ============================================================================
// Cache maintenance
// ============================================================================

#[test]
fn test_rejection_evicts_previously_verified() {
    let mut verified = VerifiedSet::new();
    let pose = pose_at(0.0);
    verified.insert(&pose);

    let mut oracle = ScriptedOracle {
        verdicts: vec![false],
    };
    verify_batch(
        &mut oracle,
        &CollisionWorld::new(),
        &rig(),
        &mut verified,
        &[pose],
        15.0,
    )
    .unwrap();
    assert!(!verified.contains(&pose));
}

#[test]
fn test_empty_batch_is_vacuously_accepted() {
    let mut oracle = ScriptedOracle { verdicts: vec![] };
    let mut verified = VerifiedSet::new();
    let ok = verify_batch(
        &mut oracle,
        &CollisionWorld::new(),
        &rig(),
        &mut verified,
        &[],
        15.0,
    )
    .unwrap();
    assert!(ok);
}
