use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Affine, Size, Vec2};

/// Absolute frame on the render timeline.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Shift forward by `frames`, saturating at `u64::MAX`.
    pub fn saturating_add(self, frames: u64) -> Self {
        Self(self.0.saturating_add(frames))
    }

    /// Signed distance `self - start` in frames, as a float.
    pub fn frames_since(self, start: FrameIndex) -> f64 {
        (i128::from(self.0) - i128::from(start.0)) as f64
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> MotionResult<Self> {
        if start.0 > end.0 {
            return Err(MotionError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range contains no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Iterate the frames of the range in order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Rational frame rate. Only the spring evaluator needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (`> 0`).
    pub den: u32,
}

impl Fps {
    /// Build a frame rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> MotionResult<Self> {
        if den == 0 {
            return Err(MotionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to whole frames, rounding down and clamping at zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
