/// Action surface.
///
/// Every host-triggered operation is one variant of [`Action`],
/// dispatched through a single handler instead of per-operation
/// polymorphism. `poll` mirrors host-guard semantics: it reports
/// whether the action is currently invocable, without mutating
/// anything; `dispatch` checks `poll` first and then runs the action to
/// completion.

use std::path::Path;

use crate::autoview_bail;
use crate::error::{AutoviewError, AutoviewResult};
use crate::export;
use crate::sample::{generate_previous, sample_views};
use crate::search::flood_fill;
use crate::verify::verify_batch;
use super::context::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flood the domain volumes with candidate locations
    Survey,
    /// Drop the candidate set and its markers
    ClearFlood,
    /// Sample a fresh batch of viewpoints from the candidate set
    GenerateViews,
    /// Remove every stored viewpoint
    ClearViewpoints,
    /// Run the verification pipeline over the current selection
    VerifySelection,
    /// Replace the selected viewpoints with freshly verified ones
    FixSelection,
    /// Select every top-level viewpoint lacking a verified record
    SelectUnverified,
    /// Select every top-level viewpoint without a previous-frame child
    SelectWithoutPrevious,
    /// Generate a previous-frame child for each selected viewpoint
    GeneratePrevious,
    /// Remove every previous-frame child
    ClearPrevious,
    /// Drop the verified-pose cache
    ClearVerification,
    /// Export viewpoints to the configured output path
    WriteViewpoints,
}

impl Action {
    /// Availability check. `Ok(())` means the action can be dispatched
    /// against the current session state.
    pub fn poll(&self, session: &Session) -> AutoviewResult<()> {
        match self {
            Action::Survey => {
                if session.probe.is_none() {
                    return Err(AutoviewError::MissingReference(
                        "probe mesh not set".to_string(),
                    ));
                }
                if session.domains.is_empty() {
                    return Err(AutoviewError::MissingReference(
                        "no domain volumes defined".to_string(),
                    ));
                }
                Ok(())
            }
            Action::ClearFlood | Action::GenerateViews => {
                if session.candidates.is_empty() {
                    return Err(AutoviewError::EmptyCandidateSet);
                }
                Ok(())
            }
            Action::ClearViewpoints
            | Action::SelectUnverified
            | Action::SelectWithoutPrevious
            | Action::ClearPrevious
            | Action::WriteViewpoints => {
                if session.viewpoints.is_empty() {
                    return Err(AutoviewError::InvalidSelection(
                        "no viewpoints exist".to_string(),
                    ));
                }
                Ok(())
            }
            Action::VerifySelection | Action::GeneratePrevious | Action::FixSelection => {
                if session.selection.is_empty() {
                    return Err(AutoviewError::InvalidSelection(
                        "no viewpoints selected".to_string(),
                    ));
                }
                if matches!(self, Action::FixSelection) && session.candidates.is_empty() {
                    return Err(AutoviewError::EmptyCandidateSet);
                }
                if session.camera_rig.is_none() {
                    return Err(AutoviewError::MissingReference(
                        "camera rig not set".to_string(),
                    ));
                }
                if session.oracle.is_none() {
                    return Err(AutoviewError::MissingReference(
                        "visibility oracle not installed".to_string(),
                    ));
                }
                Ok(())
            }
            Action::ClearVerification => {
                if session.verified.is_empty() {
                    return Err(AutoviewError::InvalidSelection(
                        "verified cache is empty".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Run the action against the session.
    pub fn dispatch(self, session: &mut Session) -> AutoviewResult<()> {
        self.poll(session)?;
        match self {
            Action::Survey => {
                session.rebuild_collision();
                let Some(probe) = session.probe.as_ref() else {
                    autoview_bail!(
                        "autoview::Action",
                        AutoviewError::MissingReference("probe mesh not set".to_string())
                    );
                };
                let result = flood_fill(probe, &session.domains, &session.collision, true);
                session.candidates = result.candidates;
                session.markers = result.markers;
                Ok(())
            }
            Action::ClearFlood => {
                session.candidates.clear();
                session.markers.clear();
                Ok(())
            }
            Action::GenerateViews => {
                session.rebuild_collision();
                let count = session.config.num_views;
                sample_views(session, count, true, false)
            }
            Action::ClearViewpoints => {
                session.viewpoints.clear();
                session.selection.clear();
                Ok(())
            }
            Action::VerifySelection => {
                session.rebuild_collision();
                let poses = session.selection_poses()?;
                let Session {
                    collision,
                    camera_rig,
                    verified,
                    config,
                    oracle,
                    ..
                } = session;
                let Some(rig) = camera_rig.as_ref() else {
                    autoview_bail!(
                        "autoview::Action",
                        AutoviewError::MissingReference("camera rig not set".to_string())
                    );
                };
                let Some(oracle) = oracle.as_deref_mut() else {
                    autoview_bail!(
                        "autoview::Action",
                        AutoviewError::MissingReference(
                            "visibility oracle not installed".to_string()
                        )
                    );
                };
                verify_batch(oracle, collision, rig, verified, &poses, config.min_foreground)?;
                Ok(())
            }
            Action::FixSelection => {
                session.rebuild_collision();
                let keys = std::mem::take(&mut session.selection);
                let count = keys.len() as u32;
                for key in keys {
                    session.viewpoints.remove(key);
                }
                sample_views(session, count, false, true)
            }
            Action::SelectUnverified => {
                session.selection = session
                    .viewpoints
                    .top_level_ordered()
                    .filter(|(_, v)| !session.verified.contains(&v.pose))
                    .map(|(k, _)| k)
                    .collect();
                Ok(())
            }
            Action::SelectWithoutPrevious => {
                session.selection = session
                    .viewpoints
                    .top_level_ordered()
                    .filter(|(_, v)| v.child.is_none())
                    .map(|(k, _)| k)
                    .collect();
                Ok(())
            }
            Action::GeneratePrevious => {
                session.rebuild_collision();
                generate_previous(session)
            }
            Action::ClearPrevious => {
                session.viewpoints.clear_children();
                let viewpoints = &session.viewpoints;
                session.selection.retain(|&key| viewpoints.contains(key));
                Ok(())
            }
            Action::ClearVerification => {
                session.verified.clear();
                Ok(())
            }
            Action::WriteViewpoints => {
                export::write_viewpoints(Path::new(&session.config.output_path), &session.viewpoints)
            }
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
