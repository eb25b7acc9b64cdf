//! Configuration for viewpoint generation
//!
//! Sampling ranges, perturbation probabilities, verification settings
//! and the remote delegate endpoint. Persisted as JSON next to the
//! project; missing files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::autoview_warn;
use crate::error::{AutoviewError, AutoviewResult};

/// Inclusive sampling range in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// One perturbation axis for previous-frame generation: the chance it
/// fires at all, and the range drawn from when it does. Rotation axes
/// are in degrees, translation axes in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisVariation {
    pub probability: f32,
    pub min: f32,
    pub max: f32,
}

impl AxisVariation {
    pub fn new(probability: f32, min: f32, max: f32) -> Self {
        Self {
            probability,
            min,
            max,
        }
    }

    /// Width of the range.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Previous-frame perturbation settings, one entry per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousConfig {
    pub pitch: AxisVariation,
    pub roll: AxisVariation,
    pub yaw: AxisVariation,
    /// Sideways offset in the parent's local frame
    pub lateral: AxisVariation,
    /// Up/down offset in the parent's local frame
    pub vertical: AxisVariation,
    /// Forward offset along the parent's view direction
    pub straight: AxisVariation,
}

impl Default for PreviousConfig {
    fn default() -> Self {
        Self {
            pitch: AxisVariation::new(0.1, -10.0, 10.0),
            roll: AxisVariation::new(0.1, 0.0, 0.0),
            yaw: AxisVariation::new(0.1, -10.0, 10.0),
            lateral: AxisVariation::new(0.1, 0.0, 0.0),
            vertical: AxisVariation::new(0.1, 0.0, 0.0),
            straight: AxisVariation::new(0.1, 0.0, 0.0),
        }
    }
}

/// Remote verification delegate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Use the remote delegate instead of the local oracle
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    /// Connect/read/write timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "localhost".to_string(),
            port: 4242,
            timeout_ms: 30_000,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoviewConfig {
    /// Viewpoints to generate per batch
    pub num_views: u32,

    /// RNG seed for reproducible sampling
    pub seed: u64,

    /// Minimum target coverage, percent of the frame
    pub min_foreground: f32,

    /// Verification render width in pixels
    pub resolution_x: u32,

    /// Verification render height in pixels
    pub resolution_y: u32,

    /// Orientation sampling ranges, degrees around the base rotation
    pub yaw: AngleRange,
    pub pitch: AngleRange,
    pub roll: AngleRange,

    /// Previous-frame perturbation axes
    pub previous: PreviousConfig,

    /// Sampler retry budget before giving up on a viewpoint
    pub max_attempts: u32,

    /// Destination for the viewpoint export file
    pub output_path: String,

    pub remote: RemoteConfig,
}

impl Default for AutoviewConfig {
    fn default() -> Self {
        Self {
            num_views: 100,
            seed: 42,
            min_foreground: 15.0,
            resolution_x: 30,
            resolution_y: 20,
            yaw: AngleRange::new(-180.0, 180.0),
            pitch: AngleRange::new(-20.0, 20.0),
            roll: AngleRange::new(0.0, 0.0),
            previous: PreviousConfig::default(),
            max_attempts: 10_000,
            output_path: "./out.cfg".to_string(),
            remote: RemoteConfig::default(),
        }
    }
}

impl AutoviewConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> AutoviewResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AutoviewError::ConfigInvalid(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AutoviewError::ConfigInvalid(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load configuration, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                autoview_warn!(
                    "autoview::Config",
                    "{}; using default configuration",
                    err
                );
                Self::default()
            }
        }
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> AutoviewResult<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            AutoviewError::ConfigInvalid(format!("failed to serialize configuration: {}", e))
        })?;
        fs::write(path, content).map_err(|e| {
            AutoviewError::ConfigInvalid(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
