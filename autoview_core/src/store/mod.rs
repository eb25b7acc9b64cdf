//! Store module — generated viewpoints and the verified-orientation set.

mod verified;
mod viewpoints;

pub use verified::VerifiedSet;
pub use viewpoints::{Viewpoint, ViewpointKey, ViewpointStore};
