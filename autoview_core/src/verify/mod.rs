//! Verify module — visibility oracles and the accept/reject pipeline.

mod oracle;
mod verifier;

pub use oracle::{Frame, FrameSource, LocalOracle, VisibilityOracle};
pub use verifier::verify_batch;
