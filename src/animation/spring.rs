use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{MotionError, MotionResult};
use serde::{Deserialize, Serialize};

/// Physical parameters of a damped spring driving progress from 0 to 1.
///
/// Construction validates that stiffness, damping and mass are finite and strictly positive, and
/// that the derived frequency and damping ratio are too, so a `SpringParams` value never produces
/// NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpringParamsDef", into = "SpringParamsDef")]
pub struct SpringParams {
    stiffness: f64,
    damping: f64,
    mass: f64,
    overshoot_clamping: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpringParamsDef {
    #[serde(default = "default_stiffness")]
    stiffness: f64,
    #[serde(default = "default_damping")]
    damping: f64,
    #[serde(default = "default_mass")]
    mass: f64,
    #[serde(default, alias = "overshoot_clamping")]
    overshoot_clamping: bool,
}

fn default_stiffness() -> f64 {
    SpringParams::DEFAULT.stiffness
}

fn default_damping() -> f64 {
    SpringParams::DEFAULT.damping
}

fn default_mass() -> f64 {
    SpringParams::DEFAULT.mass
}

impl TryFrom<SpringParamsDef> for SpringParams {
    type Error = MotionError;

    fn try_from(v: SpringParamsDef) -> Result<Self, Self::Error> {
        Ok(Self::new(v.stiffness, v.damping, v.mass)?
            .with_overshoot_clamping(v.overshoot_clamping))
    }
}

impl From<SpringParams> for SpringParamsDef {
    fn from(v: SpringParams) -> Self {
        Self {
            stiffness: v.stiffness,
            damping: v.damping,
            mass: v.mass,
            overshoot_clamping: v.overshoot_clamping,
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SpringParams {
    /// A lively, slightly underdamped spring (stiffness 100, damping 10, mass 1).
    pub const DEFAULT: Self = Self {
        stiffness: 100.0,
        damping: 10.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Validate and build spring parameters.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> MotionResult<Self> {
        for (name, v) in [
            ("stiffness", stiffness),
            ("damping", damping),
            ("mass", mass),
        ] {
            if !v.is_finite() {
                return Err(MotionError::spring(format!("{name} must be finite")));
            }
            if v <= 0.0 {
                return Err(MotionError::spring(format!(
                    "{name} must be > 0 (got {v})"
                )));
            }
        }
        let params = Self {
            stiffness,
            damping,
            mass,
            overshoot_clamping: false,
        };
        // Inputs can be valid on their own while k/m or k*m underflows or overflows.
        for (name, v) in [
            ("natural frequency", params.natural_frequency()),
            ("damping ratio", params.damping_ratio()),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(MotionError::spring(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(params)
    }

    /// Cap the response at 1.0 instead of letting it overshoot.
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Spring constant `k`.
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Damping coefficient `c`.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Mass `m`.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether the response is capped at 1.0.
    pub fn overshoot_clamping(&self) -> bool {
        self.overshoot_clamping
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `zeta = c / (2 sqrt(k m))`. Below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Step response at `secs` seconds: `x(0) = 0`, `x'(0) = 0`, converging to 1.
    pub fn position(&self, secs: f64) -> f64 {
        if secs <= 0.0 {
            return 0.0;
        }
        let t = secs;
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let x = if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            // Underdamped.
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = w0 * root;
            let e = (-zeta * w0 * t).exp();
            1.0 - e * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
        } else {
            // Overdamped.
            let z2 = overdamped_gap(zeta);
            // zeta - z2 cancels for large zeta; 1 / (zeta + z2) is the same value.
            let r1 = -w0 / (zeta + z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = 1.0 / ((zeta + z2) * 2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        };

        if self.overshoot_clamping {
            x.min(1.0)
        } else {
            x
        }
    }

    /// Upper bound on `|1 - position(secs)|`; monotonically decreasing in `secs`.
    fn envelope(&self, secs: f64) -> f64 {
        let t = secs.max(0.0);
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if (zeta - 1.0).abs() < 1e-6 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            (-zeta * w0 * t).exp() / (1.0 - zeta * zeta).sqrt()
        } else {
            let z2 = overdamped_gap(zeta);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = 1.0 / ((zeta + z2) * 2.0 * z2);
            c2 * (-w0 / (zeta + z2) * t).exp() + c1 * (-w0 * (zeta + z2) * t).exp()
        }
    }

    /// Frames after which the response stays within `epsilon` of 1.0.
    ///
    /// Uses a bounded search over the decay envelope, so the answer is conservative for
    /// underdamped springs (it ignores lucky zero crossings). A spring too stiffly damped to
    /// settle within 2^48 frames reports that bound.
    pub fn settle_frames(&self, fps: Fps, epsilon: f64) -> u64 {
        const MAX_DOUBLINGS: u32 = 48;

        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            1e-3
        };
        let settled = |frames: u64| self.envelope(fps.frames_to_secs(frames)) < epsilon;

        let mut hi = 1u64;
        let mut doublings = 0;
        while !settled(hi) {
            if doublings == MAX_DOUBLINGS {
                return hi;
            }
            hi = hi.saturating_mul(2);
            doublings += 1;
        }

        let mut lo = 0u64;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if settled(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

// sqrt(zeta^2 - 1) without squaring, so huge ratios stay finite.
fn overdamped_gap(zeta: f64) -> f64 {
    zeta * (1.0 - (1.0 / zeta).powi(2)).sqrt()
}

/// Spring-driven progress at `frame` for a spring released at `start`.
///
/// Frames before `start` return exactly 0. The result is unbounded above 1 while the spring
/// overshoots unless the params clamp it.
pub fn spring_progress(frame: FrameIndex, start: FrameIndex, params: SpringParams, fps: Fps) -> f64 {
    if frame < start {
        return 0.0;
    }
    params.position(fps.frames_to_secs(frame.0 - start.0))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
