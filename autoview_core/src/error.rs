//! Error types for the autoview toolkit
//!
//! This module defines the error types used throughout the toolkit,
//! covering action preconditions, sampling, and the remote delegate.

use std::fmt;

/// Result type for autoview operations
pub type AutoviewResult<T> = Result<T, AutoviewError>;

/// Autoview errors
#[derive(Debug, Clone, PartialEq)]
pub enum AutoviewError {
    /// A required scene reference is missing (probe, domain set, camera rig, oracle)
    MissingReference(String),

    /// The candidate location set is empty; run the survey first
    EmptyCandidateSet,

    /// A selected viewpoint violates an action precondition
    /// (unverified, or already a previous-frame child)
    InvalidSelection(String),

    /// The sampler exhausted its retry budget without placing a viewpoint
    PlacementExhausted(u32),

    /// The remote verification delegate could not be reached or timed out
    DelegateUnavailable(String),

    /// The remote verification delegate violated the wire protocol
    DelegateProtocol(String),

    /// The viewpoint export file could not be written
    ExportFailed(String),

    /// The configuration file could not be read, parsed, or written
    ConfigInvalid(String),
}

impl fmt::Display for AutoviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoviewError::MissingReference(what) => write!(f, "Missing reference: {}", what),
            AutoviewError::EmptyCandidateSet => write!(f, "Candidate location set is empty"),
            AutoviewError::InvalidSelection(msg) => write!(f, "Invalid selection: {}", msg),
            AutoviewError::PlacementExhausted(attempts) => {
                write!(f, "Unable to place viewpoint after {} attempts", attempts)
            }
            AutoviewError::DelegateUnavailable(msg) => {
                write!(f, "Verification delegate unavailable: {}", msg)
            }
            AutoviewError::DelegateProtocol(msg) => {
                write!(f, "Verification delegate protocol error: {}", msg)
            }
            AutoviewError::ExportFailed(msg) => write!(f, "Export failed: {}", msg),
            AutoviewError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AutoviewError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
