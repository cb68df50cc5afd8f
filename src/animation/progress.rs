use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;
use crate::foundation::math::lerp;

/// Smallest duration the engine will divide by.
pub const MIN_DURATION_FRAMES: u64 = 1;

/// Clamped linear completion of a `[start, start + duration]` window.
///
/// A zero duration is treated as [`MIN_DURATION_FRAMES`].
pub fn linear_ratio(frame: FrameIndex, start: FrameIndex, duration: u64) -> f64 {
    let duration = duration.max(MIN_DURATION_FRAMES) as f64;
    (frame.frames_since(start) / duration).clamp(0.0, 1.0)
}

/// Eased progress of a `[start, start + duration]` window at `frame`.
///
/// The linear ratio is clamped to `[0, 1]` on both sides before `ease` is applied, so frames
/// before `start` read as `ease(0)` and frames past the end read as `ease(1)`.
pub fn progress(frame: FrameIndex, start: FrameIndex, duration: u64, ease: Ease) -> f64 {
    ease.apply(linear_ratio(frame, start, duration))
}

/// Map `value` from `input` to `output`, clamping outside the input range.
///
/// A degenerate input range acts as a step at `input.1`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64), ease: Ease) -> f64 {
    let (in0, in1) = input;
    let span = in1 - in0;
    let t = if span.abs() < f64::EPSILON {
        if value >= in1 { 1.0 } else { 0.0 }
    } else {
        ((value - in0) / span).clamp(0.0, 1.0)
    };
    lerp(output.0, output.1, ease.apply(t))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
