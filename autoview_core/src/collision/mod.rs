//! Collision module — triangle meshes, bounding-volume trees, and the
//! scene-level collision oracle.
//!
//! The search and verification stages only ever ask yes/no questions
//! (does the translated probe touch anything, does this ray segment hit
//! anything), so the oracle returns on first hit and accumulates no hit
//! details.

mod bvh;
mod mesh;
mod world;

pub use bvh::Bvh;
pub use mesh::TriMesh;
pub use world::CollisionWorld;
