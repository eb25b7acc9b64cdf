/*!
# Autoview Core

Candidate-viewpoint search and verification for camera placement.

This crate floods a bounded set of domain volumes with admissible
camera positions (a breadth-first lattice search pruned by collision
and containment tests), samples random camera poses from the result,
and verifies each pose against a collision oracle and a pluggable
visibility oracle before persisting it. Accepted poses can be chained
into "previous-frame" lineages and exported as plain-text transform
lists.

## Architecture

- **Session**: explicit context object owning all generation state
- **Action**: the dispatchable operation surface (survey, sample,
  verify, export)
- **CollisionWorld**: BVH-backed overlap and raycast queries
- **VisibilityOracle**: trait seam for the render-visibility verdict;
  a local frame-source oracle lives here, the remote socket delegate
  in the companion `autoview_remote` crate
*/

// Internal modules
mod config;
mod error;
mod export;
pub mod collision;
pub mod geom;
pub mod log;
pub mod sample;
pub mod search;
pub mod session;
pub mod store;
pub mod verify;

// Error types at the crate root (the logging macros resolve them via
// `$crate`)
pub use error::{AutoviewError, AutoviewResult};

// Main autoview namespace module
pub mod autoview {
    // Error types
    pub use crate::error::{AutoviewError, AutoviewResult};

    // Session context and actions
    pub use crate::session::{Action, Session};

    // Configuration
    pub use crate::config::{AngleRange, AutoviewConfig, AxisVariation, PreviousConfig, RemoteConfig};

    // Export helpers
    pub use crate::export::{format_viewpoints, write_viewpoints};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Geometry sub-module
    pub mod geom {
        pub use crate::geom::*;
    }

    // Collision sub-module
    pub mod collision {
        pub use crate::collision::*;
    }

    // Search sub-module
    pub mod search {
        pub use crate::search::*;
    }

    // Sampling sub-module
    pub mod sample {
        pub use crate::sample::*;
    }

    // Verification sub-module
    pub mod verify {
        pub use crate::verify::*;
    }

    // Store sub-module
    pub mod store {
        pub use crate::store::*;
    }
}

// Re-export math library at crate root
pub use glam;
