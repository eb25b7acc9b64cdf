/// Previous-frame sampling.
///
/// Derives one child pose per selected viewpoint by randomly perturbing
/// a subset of six axes: pitch, roll, yaw (degrees) and lateral,
/// vertical, straight (scene units along the parent's local frame, with
/// the straight axis sign-inverted so positive values move backward
/// along the view direction). Preconditions are checked over the whole
/// selection before anything mutates, so a bad selection creates zero
/// children.

use glam::Vec3;
use rand::Rng;

use crate::autoview_bail;
use crate::error::{AutoviewError, AutoviewResult};
use crate::geom::Pose;
use crate::session::Session;
use crate::verify::verify_batch;

/// Index of the axis forced when no Bernoulli draw fires.
///
/// The last axis with nonzero probability wins, falling back to axis 0
/// when every probability is zero. Downstream data may depend on this
/// exact tie-break, so do not replace it with a true arg-max.
fn forced_axis(probabilities: &[f32; 6]) -> usize {
    let mut fallback = 0;
    for (index, &p) in probabilities.iter().enumerate() {
        if p > 0.0 {
            fallback = index;
        }
    }
    fallback
}

/// Generate a previous-frame child for every selected viewpoint.
///
/// Each child must pass verification and a clear line of sight from its
/// parent before it is attached; failures retry the same parent with
/// fresh draws up to the configured attempt budget.
pub fn generate_previous(session: &mut Session) -> AutoviewResult<()> {
    let parents = session.selection.clone();
    if parents.is_empty() {
        autoview_bail!(
            "autoview::Previous",
            AutoviewError::InvalidSelection("no viewpoints selected".to_string())
        );
    }

    // Fail-fast precondition pass over the whole selection
    for &key in &parents {
        let Some(view) = session.viewpoints.get(key) else {
            autoview_bail!(
                "autoview::Previous",
                AutoviewError::MissingReference(
                    "selected viewpoint no longer exists".to_string()
                )
            );
        };
        if view.is_child() {
            autoview_bail!(
                "autoview::Previous",
                AutoviewError::InvalidSelection(
                    "previous-frame viewpoints cannot be extended".to_string()
                )
            );
        }
        if !session.verified.contains(&view.pose) {
            autoview_bail!(
                "autoview::Previous",
                AutoviewError::InvalidSelection(
                    "selection contains an unverified viewpoint".to_string()
                )
            );
        }
    }

    let Session {
        viewpoints,
        verified,
        collision,
        camera_rig,
        config,
        rng,
        oracle,
        ..
    } = session;

    let axes = [
        config.previous.pitch,
        config.previous.roll,
        config.previous.yaw,
        config.previous.lateral,
        config.previous.vertical,
        config.previous.straight,
    ];
    let probabilities = [
        axes[0].probability,
        axes[1].probability,
        axes[2].probability,
        axes[3].probability,
        axes[4].probability,
        axes[5].probability,
    ];
    let fallback = forced_axis(&probabilities);

    for &parent_key in &parents {
        viewpoints.remove_child_of(parent_key);
        let parent_pose = match viewpoints.get(parent_key) {
            Some(view) => view.pose,
            None => {
                autoview_bail!(
                    "autoview::Previous",
                    AutoviewError::MissingReference(
                        "selected viewpoint no longer exists".to_string()
                    )
                );
            }
        };

        let mut attached = false;
        for _ in 0..config.max_attempts {
            let mut offsets = [0.0f32; 6];
            let mut any_selected = false;
            for (index, axis) in axes.iter().enumerate() {
                if rng.random::<f32>() < axis.probability {
                    offsets[index] = rng.random::<f32>() * (axis.max - axis.min) + axis.min;
                    any_selected = true;
                }
            }
            if !any_selected {
                // Guarantee at least one perturbation
                let axis = axes[fallback];
                offsets[fallback] = rng.random::<f32>() * (axis.max - axis.min) + axis.min;
            }

            let rotation = parent_pose.rotation
                + Vec3::new(
                    offsets[0].to_radians(),
                    offsets[1].to_radians(),
                    offsets[2].to_radians(),
                );
            let translation =
                parent_pose.rotation_matrix() * Vec3::new(offsets[3], offsets[4], -offsets[5]);
            let pose = Pose::new(parent_pose.position + translation, rotation);

            let Some(rig) = camera_rig.as_ref() else {
                autoview_bail!(
                    "autoview::Previous",
                    AutoviewError::MissingReference(
                        "camera rig required for previous-frame sampling".to_string()
                    )
                );
            };
            let Some(oracle) = oracle.as_deref_mut() else {
                autoview_bail!(
                    "autoview::Previous",
                    AutoviewError::MissingReference(
                        "visibility oracle not installed".to_string()
                    )
                );
            };
            if !verify_batch(
                oracle,
                collision,
                rig,
                verified,
                std::slice::from_ref(&pose),
                config.min_foreground,
            )? {
                continue;
            }

            // The parent must keep a clear line of sight to its child
            let delta = pose.position - parent_pose.position;
            let distance = delta.length();
            if distance > 0.0 && collision.raycast(parent_pose.position, delta / distance, distance)
            {
                continue;
            }

            viewpoints.attach_child(parent_key, pose, parent_pose.matrix().inverse())?;
            attached = true;
            break;
        }
        if !attached {
            autoview_bail!(
                "autoview::Previous",
                AutoviewError::PlacementExhausted(config.max_attempts)
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "previous_tests.rs"]
mod tests;
