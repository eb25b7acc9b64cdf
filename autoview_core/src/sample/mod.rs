//! Sample module — fresh viewpoint sampling and the previous-frame
//! perturbation variant.

mod previous;
mod sampler;

pub use previous::generate_previous;
pub use sampler::sample_views;
