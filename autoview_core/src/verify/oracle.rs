/// Visibility oracles.
///
/// An oracle answers one question per pose: does the target cover at
/// least the requested share of the rendered frame? The local oracle
/// renders through a pluggable [`FrameSource`] and measures coverage
/// itself; a remote delegate (see the companion wire crate) ships the
/// poses to an external renderer and trusts its verdicts.

use crate::error::AutoviewResult;
use crate::geom::Pose;

/// A rendered RGBA frame. Pixels are row-major, floating point.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[f32; 4]>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Share of pixels with nonzero alpha, as a percentage of the
    /// frame. Pixels the target does not touch render fully
    /// transparent, so alpha coverage is foreground coverage.
    pub fn foreground_ratio(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let covered = self.pixels.iter().filter(|p| p[3] != 0.0).count();
        covered as f32 / self.pixels.len() as f32 * 100.0
    }
}

/// Produces a frame for a given camera pose.
pub trait FrameSource {
    fn render(&mut self, pose: &Pose) -> AutoviewResult<Frame>;
}

/// Batch visibility judgment: one verdict per pose.
pub trait VisibilityOracle {
    /// `min_foreground` is the acceptance threshold in percent of the
    /// frame. Implementations return exactly one verdict per pose, in
    /// order.
    fn visibility(&mut self, poses: &[Pose], min_foreground: f32) -> AutoviewResult<Vec<bool>>;
}

/// Oracle that renders locally and thresholds foreground coverage.
pub struct LocalOracle {
    source: Box<dyn FrameSource>,
}

impl LocalOracle {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        Self { source }
    }
}

impl VisibilityOracle for LocalOracle {
    fn visibility(&mut self, poses: &[Pose], min_foreground: f32) -> AutoviewResult<Vec<bool>> {
        let mut verdicts = Vec::with_capacity(poses.len());
        for pose in poses {
            let frame = self.source.render(pose)?;
            verdicts.push(frame.foreground_ratio() >= min_foreground);
        }
        Ok(verdicts)
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod tests;
