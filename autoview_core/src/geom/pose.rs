/// Camera pose — world position plus XYZ Euler orientation.
///
/// Poses are passive containers: the sampler creates them, the verifier
/// accepts or rejects them, the store persists them. Conversion to a
/// world matrix happens on demand (export, wire encoding, collision).

use glam::{EulerRot, Mat3, Mat4, Vec3};

/// Quantization scale for [`PoseKey`]: components are keyed at 1e-5
/// resolution so that poses re-derived through matrix round trips still
/// map to the same verified-cache entry.
const KEY_SCALE: f64 = 1.0e5;

/// A camera pose: world position + Euler rotation (radians, XYZ order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub position: Vec3,
    /// Euler rotation in radians (x = pitch, y = roll, z = yaw)
    pub rotation: Vec3,
}

impl Pose {
    /// Create a pose from position and Euler rotation (radians).
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Identity pose at the world origin.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Full affine transform (rotation then translation).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Rotation-only 3×3 basis (used to map local perturbation offsets
    /// into world space).
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Quantized cache key for verified-orientation lookups.
    ///
    /// Component-wise fixed-precision key instead of raw floating-point
    /// equality, so drift below the key resolution cannot produce false
    /// cache misses.
    pub fn key(&self) -> PoseKey {
        PoseKey([
            quantize(self.position.x),
            quantize(self.position.y),
            quantize(self.position.z),
            quantize(self.rotation.x),
            quantize(self.rotation.y),
            quantize(self.rotation.z),
        ])
    }
}

fn quantize(v: f32) -> i64 {
    (v as f64 * KEY_SCALE).round() as i64
}

/// Fixed-precision integer key identifying a pose up to [`KEY_SCALE`]
/// resolution. Hashable; used by the verified-orientation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoseKey([i64; 6]);

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
