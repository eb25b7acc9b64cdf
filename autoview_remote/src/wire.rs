/// Wire codec for the delegate exchange.
///
/// Request: a 4-byte little-endian signed pose count, then a float
/// block of `1 + 16·N` little-endian `f32` values — the foreground
/// threshold in `[0, 1]` followed by each pose's 4×4 world transform in
/// row-major order. Reply: `N` raw verdict bytes, no framing.

use glam::Mat4;

use autoview_core::geom::Pose;
use autoview_core::{AutoviewError, AutoviewResult};

/// Floats per serialized pose transform.
pub const FLOATS_PER_POSE: usize = 16;

/// Encode the pose-count header.
pub fn encode_pose_count(count: i32) -> [u8; 4] {
    count.to_le_bytes()
}

/// Decode the pose-count header.
pub fn decode_pose_count(bytes: [u8; 4]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Encode the float block: threshold, then one row-major transform per
/// pose.
pub fn encode_payload(threshold: f32, poses: &[Pose]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 * (1 + FLOATS_PER_POSE * poses.len()));
    out.extend_from_slice(&threshold.to_le_bytes());
    for pose in poses {
        // glam stores columns; transpose to serialize rows
        for value in pose.matrix().transpose().to_cols_array() {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
    out
}

/// Decode a float block back into the threshold and the transforms.
///
/// The byte length must be exactly `4 · (1 + 16·N)` for some `N`.
pub fn decode_payload(bytes: &[u8]) -> AutoviewResult<(f32, Vec<Mat4>)> {
    if bytes.len() < 4 || bytes.len() % 4 != 0 {
        return Err(AutoviewError::DelegateProtocol(format!(
            "float block of {} bytes is not 4-byte aligned",
            bytes.len()
        )));
    }
    let float_count = bytes.len() / 4 - 1;
    if float_count % FLOATS_PER_POSE != 0 {
        return Err(AutoviewError::DelegateProtocol(format!(
            "{} floats after the threshold is not a whole number of poses",
            float_count
        )));
    }

    let mut floats = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]));
    let threshold = match floats.next() {
        Some(t) => t,
        None => {
            return Err(AutoviewError::DelegateProtocol(
                "float block missing threshold".to_string(),
            ));
        }
    };

    let mut transforms = Vec::with_capacity(float_count / FLOATS_PER_POSE);
    let values: Vec<f32> = floats.collect();
    for block in values.chunks_exact(FLOATS_PER_POSE) {
        let mut array = [0.0f32; FLOATS_PER_POSE];
        array.copy_from_slice(block);
        // Serialized rows become columns again through the transpose
        transforms.push(Mat4::from_cols_array(&array).transpose());
    }
    Ok((threshold, transforms))
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
