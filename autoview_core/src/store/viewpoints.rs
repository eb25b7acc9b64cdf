/// Viewpoint store — ownership of every generated camera pose.
///
/// Top-level viewpoints are the sampler's output; each may carry at
/// most one child, a perturbed follow-up pose produced by the
/// previous-frame generator. Children never have children of their own.
///
/// Keys stay stable across removals, so the session's selection list
/// can hold keys without invalidation bookkeeping.

use glam::Mat4;
use slotmap::SlotMap;

use crate::error::{AutoviewError, AutoviewResult};
use crate::geom::Pose;

slotmap::new_key_type! {
    /// Stable handle to a stored viewpoint.
    pub struct ViewpointKey;
}

/// A stored camera pose with its optional parent/child links.
#[derive(Debug, Clone)]
pub struct Viewpoint {
    /// World pose of this viewpoint
    pub pose: Pose,
    /// Set when this viewpoint is a previous-frame child
    pub parent: Option<ViewpointKey>,
    /// Set when a previous-frame child has been generated for this pose
    pub child: Option<ViewpointKey>,
    /// Inverse of the parent's world matrix at attach time; kept so the
    /// child can be exported relative to its parent
    pub parent_inverse: Option<Mat4>,
}

impl Viewpoint {
    fn top_level(pose: Pose) -> Self {
        Self {
            pose,
            parent: None,
            child: None,
            parent_inverse: None,
        }
    }

    /// True when this viewpoint was generated as a previous-frame child.
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }
}

/// All generated viewpoints, with top-level insertion order preserved.
#[derive(Debug, Default)]
pub struct ViewpointStore {
    views: SlotMap<ViewpointKey, Viewpoint>,
    order: Vec<ViewpointKey>,
}

impl ViewpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new top-level viewpoint.
    pub fn insert(&mut self, pose: Pose) -> ViewpointKey {
        let key = self.views.insert(Viewpoint::top_level(pose));
        self.order.push(key);
        key
    }

    /// Attach a previous-frame child to `parent`.
    ///
    /// An existing child is replaced. `parent_inverse` is the inverse of
    /// the parent's world matrix at attach time.
    pub fn attach_child(
        &mut self,
        parent: ViewpointKey,
        pose: Pose,
        parent_inverse: Mat4,
    ) -> AutoviewResult<ViewpointKey> {
        if !self.views.contains_key(parent) {
            return Err(AutoviewError::MissingReference(
                "child attach target no longer exists".to_string(),
            ));
        }
        self.remove_child_of(parent);

        let key = self.views.insert(Viewpoint {
            pose,
            parent: Some(parent),
            child: None,
            parent_inverse: Some(parent_inverse),
        });
        self.views[parent].child = Some(key);
        Ok(key)
    }

    /// Remove a viewpoint. A top-level viewpoint takes its child with
    /// it; removing a child clears the parent's link.
    pub fn remove(&mut self, key: ViewpointKey) {
        let Some(view) = self.views.remove(key) else {
            return;
        };
        if let Some(child) = view.child {
            self.views.remove(child);
        }
        if let Some(parent) = view.parent {
            if let Some(parent_view) = self.views.get_mut(parent) {
                parent_view.child = None;
            }
        }
        self.order.retain(|&k| k != key);
    }

    /// Remove the child of `parent`, if it has one.
    pub fn remove_child_of(&mut self, parent: ViewpointKey) {
        let Some(child) = self.views.get(parent).and_then(|v| v.child) else {
            return;
        };
        self.views.remove(child);
        self.views[parent].child = None;
    }

    /// Remove every child viewpoint, keeping top-level poses.
    pub fn clear_children(&mut self) {
        let children: Vec<ViewpointKey> = self
            .views
            .iter()
            .filter(|(_, v)| v.is_child())
            .map(|(k, _)| k)
            .collect();
        for key in children {
            self.remove(key);
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.views.clear();
        self.order.clear();
    }

    pub fn get(&self, key: ViewpointKey) -> Option<&Viewpoint> {
        self.views.get(key)
    }

    pub fn get_mut(&mut self, key: ViewpointKey) -> Option<&mut Viewpoint> {
        self.views.get_mut(key)
    }

    pub fn contains(&self, key: ViewpointKey) -> bool {
        self.views.contains_key(key)
    }

    /// Total stored viewpoints, children included.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Top-level viewpoints in insertion order.
    pub fn top_level_ordered(&self) -> impl Iterator<Item = (ViewpointKey, &Viewpoint)> {
        self.order.iter().map(|&k| (k, &self.views[k]))
    }
}

#[cfg(test)]
#[path = "viewpoints_tests.rs"]
mod tests;
