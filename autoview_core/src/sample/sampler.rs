/// Fresh viewpoint sampling.
///
/// Positions come from the candidate set produced by the survey;
/// orientations are the session base rotation plus independent uniform
/// perturbations per axis. With `checked` set, every draw passes
/// through the verification pipeline before it is persisted, and
/// rejected draws are retried up to the configured attempt budget.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::autoview_bail;
use crate::config::AngleRange;
use crate::error::{AutoviewError, AutoviewResult};
use crate::geom::Pose;
use crate::session::Session;
use crate::verify::verify_batch;

/// Uniform draw from an inclusive degree range.
fn draw_range(rng: &mut StdRng, range: AngleRange) -> f32 {
    rng.random::<f32>() * range.span() + range.min
}

/// Sample `count` viewpoints into the session store.
///
/// `reset` clears the store and reseeds the RNG from the configured
/// seed, making the draw sequence reproducible. `checked` verifies each
/// draw before persisting it; unverifiable draws are retried until the
/// attempt budget runs out.
pub fn sample_views(
    session: &mut Session,
    count: u32,
    reset: bool,
    checked: bool,
) -> AutoviewResult<()> {
    if session.candidates.is_empty() {
        autoview_bail!("autoview::Sample", AutoviewError::EmptyCandidateSet);
    }
    if reset {
        session.viewpoints.clear();
        session.selection.clear();
        session.rng = StdRng::seed_from_u64(session.config.seed);
    }

    let Session {
        candidates,
        base_rotation,
        collision,
        camera_rig,
        viewpoints,
        verified,
        config,
        rng,
        oracle,
        ..
    } = session;

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..config.max_attempts {
            let index = ((rng.random::<f32>() * candidates.len() as f32) as usize)
                .min(candidates.len() - 1);
            let position = candidates[index];
            let pitch = draw_range(rng, config.pitch).to_radians();
            let roll = draw_range(rng, config.roll).to_radians();
            let yaw = draw_range(rng, config.yaw).to_radians();
            let pose = Pose::new(position, *base_rotation + Vec3::new(pitch, roll, yaw));

            if checked {
                let Some(rig) = camera_rig.as_ref() else {
                    autoview_bail!(
                        "autoview::Sample",
                        AutoviewError::MissingReference(
                            "camera rig required for checked sampling".to_string()
                        )
                    );
                };
                let Some(oracle) = oracle.as_deref_mut() else {
                    autoview_bail!(
                        "autoview::Sample",
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
            }

            viewpoints.insert(pose);
            placed = true;
            break;
        }
        if !placed {
            autoview_bail!(
                "autoview::Sample",
                AutoviewError::PlacementExhausted(config.max_attempts)
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
