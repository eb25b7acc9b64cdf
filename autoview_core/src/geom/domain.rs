/// Domain volumes — oriented boxes defining legal placement space.
///
/// A domain is an invertible affine transform whose local space is the
/// cube [-1, 1]^3. A probe "fits" a domain only if every corner of its
/// world bounding box maps inside that cube; a set of domains accepts
/// the probe if any single member fully contains it (union semantics,
/// no partial credit across domains).

use glam::{Mat4, Vec3};

/// One oriented placement region.
#[derive(Debug, Clone, Copy)]
pub struct DomainVolume {
    /// Local-to-world transform of the domain box
    world: Mat4,
    /// Cached world-to-local inverse, applied per corner query
    world_inv: Mat4,
}

impl DomainVolume {
    /// Create a domain from its local-to-world transform.
    ///
    /// The transform must be invertible; the inverse is cached once here
    /// rather than recomputed per containment query.
    pub fn new(world: Mat4) -> Self {
        Self {
            world,
            world_inv: world.inverse(),
        }
    }

    /// Local-to-world transform of this domain.
    pub fn world(&self) -> Mat4 {
        self.world
    }

    /// Test a single world-space point for membership.
    ///
    /// Boundary inclusive: a point mapping exactly onto the unit-cube
    /// face still counts as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.world_inv.transform_point3(point);
        local.x.abs() <= 1.0 && local.y.abs() <= 1.0 && local.z.abs() <= 1.0
    }

    /// Test whether the probe, described by its 8 world-space bounding
    /// corners shifted by `offset`, lies entirely inside this domain.
    ///
    /// A single corner outside on any axis rejects the domain.
    pub fn contains_probe(&self, corners: &[Vec3; 8], offset: Vec3) -> bool {
        corners.iter().all(|c| self.contains_point(*c + offset))
    }
}

/// Union of domain volumes.
#[derive(Debug, Clone, Default)]
pub struct DomainSet {
    volumes: Vec<DomainVolume>,
}

impl DomainSet {
    /// Empty set (contains nothing).
    pub fn new() -> Self {
        Self { volumes: Vec::new() }
    }

    /// Build the set from domain local-to-world transforms.
    pub fn from_transforms(transforms: impl IntoIterator<Item = Mat4>) -> Self {
        Self {
            volumes: transforms.into_iter().map(DomainVolume::new).collect(),
        }
    }

    /// Add one domain volume.
    pub fn push(&mut self, volume: DomainVolume) {
        self.volumes.push(volume);
    }

    /// Number of member volumes.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// True when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Union membership: true as soon as one member fully contains the
    /// probe (OR across domains, AND across corners within a domain).
    pub fn contains_probe(&self, corners: &[Vec3; 8], offset: Vec3) -> bool {
        self.volumes.iter().any(|v| v.contains_probe(corners, offset))
    }
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
