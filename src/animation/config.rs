use crate::animation::ease::Ease;
use crate::animation::kind::AnimationKind;
use crate::animation::progress::MIN_DURATION_FRAMES;
use crate::animation::spring::SpringParams;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use crate::style::length::Length;
use serde::{Deserialize, Serialize};

/// Duration used when a config omits `duration` entirely.
pub const DEFAULT_DURATION_FRAMES: i64 = 30;

fn default_duration() -> i64 {
    DEFAULT_DURATION_FRAMES
}

/// Progress source selector: a named curve or spring physics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Curve applied to the clamped linear ratio.
    Curve(Ease),
    /// Spring physics; honoured only by spring-driven kinds.
    Spring(SpringParams),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Curve(Ease::Linear)
    }
}

impl From<Ease> for Easing {
    fn from(e: Ease) -> Self {
        Self::Curve(e)
    }
}

impl From<SpringParams> for Easing {
    fn from(p: SpringParams) -> Self {
        Self::Spring(p)
    }
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct SpringRepr<'a> {
            spring: &'a SpringParams,
        }

        match self {
            Self::Curve(e) => e.serialize(serializer),
            Self::Spring(p) => SpringRepr { spring: p }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Parse structurally first so spring validation errors surface verbatim instead of
        // being swallowed by an untagged enum.
        let v = serde_json::Value::deserialize(deserializer)?;
        if let Some(spring) = v.get("spring") {
            let params = SpringParams::deserialize(spring).map_err(serde::de::Error::custom)?;
            return Ok(Self::Spring(params));
        }
        Ease::deserialize(v)
            .map(Self::Curve)
            .map_err(serde::de::Error::custom)
    }
}

/// Kind-specific overrides. Every field is optional; formulas fall back to their own defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomParams {
    /// Travel distance for slide-style kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Length>,
    /// Strength multiplier for effect kinds (glitch, blur, pulse, bounce).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Start (in) or end (out) scale for scale/zoom kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Rotation magnitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Perspective distance in pixels for 3D kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f64>,
    /// Oscillation count `k` for `sin(p * 2pi * k)` terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oscillations: Option<f64>,
    /// Salt mixed into the glitch jitter seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn finite_or(v: Option<f64>, default: f64) -> f64 {
    v.filter(|v| v.is_finite()).unwrap_or(default)
}

impl CustomParams {
    pub(crate) fn distance_or(&self, default: Length) -> Length {
        self.distance
            .filter(|d| d.value().is_finite())
            .unwrap_or(default)
    }

    pub(crate) fn intensity_or(&self, default: f64) -> f64 {
        finite_or(self.intensity, default).max(0.0)
    }

    pub(crate) fn scale_or(&self, default: f64) -> f64 {
        finite_or(self.scale, default)
    }

    pub(crate) fn angle_or(&self, default: f64) -> f64 {
        finite_or(self.angle, default)
    }

    pub(crate) fn perspective_or(&self, default: f64) -> f64 {
        finite_or(self.perspective, default)
    }

    pub(crate) fn oscillations_or(&self, default: f64) -> f64 {
        finite_or(self.oscillations, default)
    }
}

/// Declarative description of one animation phase.
///
/// `delay` and `duration` hold whatever the caller supplied; the engine coerces them when reading
/// (see [`AnimationConfig::start_frame`] and [`AnimationConfig::duration_frames`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Which formula to evaluate.
    pub kind: AnimationKind,
    /// Frames to wait before starting; negative values read as 0.
    #[serde(default)]
    pub delay: i64,
    /// Length in frames; non-positive values read as one frame.
    #[serde(default = "default_duration")]
    pub duration: i64,
    /// Progress source.
    #[serde(default)]
    pub easing: Easing,
    /// Kind-specific overrides.
    #[serde(default)]
    pub custom: CustomParams,
}

impl AnimationConfig {
    /// A config with no delay, the default duration and linear easing.
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            delay: 0,
            duration: DEFAULT_DURATION_FRAMES,
            easing: Easing::default(),
            custom: CustomParams::default(),
        }
    }

    /// A disabled phase.
    pub fn none() -> Self {
        Self::new(AnimationKind::None)
    }

    /// Copy with a different delay.
    pub fn with_delay(mut self, delay: i64) -> Self {
        self.delay = delay;
        self
    }

    /// Copy with a different duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Copy with a different easing.
    pub fn with_easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Copy with different custom params.
    pub fn with_custom(mut self, custom: CustomParams) -> Self {
        self.custom = custom;
        self
    }

    /// Effective delay in frames.
    pub fn delay_frames(&self) -> u64 {
        self.delay.max(0) as u64
    }

    /// Effective start frame of a standalone (entry) phase.
    pub fn start_frame(&self) -> FrameIndex {
        FrameIndex(self.delay_frames())
    }

    /// Effective duration in frames, never zero.
    pub fn duration_frames(&self) -> u64 {
        if self.duration <= 0 {
            MIN_DURATION_FRAMES
        } else {
            self.duration as u64
        }
    }

    /// Copy with delay and duration coerced to their effective values.
    ///
    /// Logs a warning when anything had to change, which usually means an upstream data issue.
    pub fn sanitized(&self) -> Self {
        let delay = self.delay_frames() as i64;
        let duration = self.duration_frames() as i64;
        if delay != self.delay || duration != self.duration {
            tracing::warn!(
                kind = self.kind.name(),
                delay = self.delay,
                duration = self.duration,
                "coercing malformed animation timing (delay -> {delay}, duration -> {duration})"
            );
        }
        Self {
            delay,
            duration,
            ..*self
        }
    }

    /// Parse a config from JSON and sanitize its timing.
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| MotionError::serde(format!("animation config: {e}")))?;
        Ok(cfg.sanitized())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
