//! Geometry module — bounding boxes, camera poses, and domain volumes.
//!
//! Provides passive math containers shared by the search, sampling,
//! and verification stages. No scene state lives here.

mod aabb;
mod domain;
mod pose;

pub use aabb::Aabb;
pub use domain::{DomainSet, DomainVolume};
pub use pose::{Pose, PoseKey};
