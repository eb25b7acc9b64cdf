/// Verified-orientation cache.
///
/// Remembers every pose the verifier has accepted, keyed by quantized
/// pose components. The previous-frame generator consults this set as a
/// precondition: only verified top-level poses may be perturbed.

use rustc_hash::FxHashSet;

use crate::geom::{Pose, PoseKey};

/// Set of poses that passed verification.
#[derive(Debug, Default)]
pub struct VerifiedSet {
    keys: FxHashSet<PoseKey>,
}

impl VerifiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pose as verified. Returns false if it was already known.
    pub fn insert(&mut self, pose: &Pose) -> bool {
        self.keys.insert(pose.key())
    }

    /// Drop a pose from the verified set. Returns false if it was not
    /// present.
    pub fn remove(&mut self, pose: &Pose) -> bool {
        self.keys.remove(&pose.key())
    }

    pub fn contains(&self, pose: &Pose) -> bool {
        self.keys.contains(&pose.key())
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
#[path = "verified_tests.rs"]
mod tests;
