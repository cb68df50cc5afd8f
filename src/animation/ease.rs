use serde::{Deserialize, Serialize};

/// Named easing curves mapping normalized time to normalized progress.
///
/// Every curve is total on `[0, 1]` (inputs are clamped) and maps `0 -> 0`, `1 -> 1`.
/// `InBack`, `OutBack`, `InOutBack` and `ElasticOut` overshoot `[0, 1]` transiently.
/// `BounceOut` stays inside `[0, 1]` but dips between bounces. Every other curve is monotone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Pulls back below 0 before accelerating.
    InBack,
    /// Overshoots past 1 before settling.
    OutBack,
    /// Back on both ends.
    InOutBack,
    /// Decaying oscillation around 1.
    ElasticOut,
    /// Piecewise bounce settling at 1.
    BounceOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

const NAMED: &[(&str, Ease)] = &[
    ("linear", Ease::Linear),
    ("ease", Ease::Ease),
    ("ease-in", Ease::EaseIn),
    ("ease-out", Ease::EaseOut),
    ("ease-in-out", Ease::EaseInOut),
    ("in-quad", Ease::InQuad),
    ("out-quad", Ease::OutQuad),
    ("in-out-quad", Ease::InOutQuad),
    ("in-cubic", Ease::InCubic),
    ("out-cubic", Ease::OutCubic),
    ("in-out-cubic", Ease::InOutCubic),
    ("in-back", Ease::InBack),
    ("out-back", Ease::OutBack),
    ("in-out-back", Ease::InOutBack),
    ("elastic-out", Ease::ElasticOut),
    ("bounce-out", Ease::BounceOut),
];

fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Ease {
    /// Canonical name, or `None` for [`Ease::CubicBezier`].
    pub fn name(self) -> Option<&'static str> {
        NAMED.iter().find(|(_, e)| *e == self).map(|(n, _)| *n)
    }

    /// Look up a curve by name.
    ///
    /// Matching ignores case and `-`/`_`/space separators, and accepts an optional `ease`
    /// prefix on the polynomial families (`easeInQuad`, `ease_out_cubic`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let folded = fold_name(name);
        let bare = folded
            .strip_prefix("ease")
            .filter(|rest| rest.len() > 3)
            .unwrap_or(&folded);
        NAMED.iter().find_map(|(n, e)| {
            let key = fold_name(n);
            (key == folded || key == bare).then_some(*e)
        })
    }

    /// Like [`Ease::from_name`], but unknown names fall back to [`Ease::Linear`].
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(ease = name, "unknown easing name; using linear");
            Self::Linear
        })
    }

    /// Apply this curve to normalized time `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier_ease(t, 0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
            }
            Self::InOutBack => {
                let c2 = BACK_C1 * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((c2 + 1.0) * 2.0 * t - c2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((c2 + 1.0) * (t * 2.0 - 2.0) + c2) + 2.0) / 2.0
                }
            }
            Self::ElasticOut => elastic_out(t),
            Self::BounceOut => bounce_out(t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // CSS cubic-bezier: given x in [0,1], solve u such that bx(u)=x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Control x values outside [0,1] make bx non-monotone; clamp like browsers do.
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    // Newton-Raphson, fixed iteration count.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        if x_t.abs() < 1e-9 {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat derivatives.
    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    for _ in 0..32 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-9 {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

fn elastic_out(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let p = 0.3;
    (2f64).powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * std::f64::consts::PI) / p).sin() + 1.0
}

fn bounce_out(t: f64) -> f64 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EaseRepr {
    Str(String),
    CubicBezier {
        #[serde(alias = "cubicBezier")]
        cubic_bezier: [f64; 4],
    },
}

impl Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = match *self {
            Self::CubicBezier { x1, y1, x2, y2 } => EaseRepr::CubicBezier {
                cubic_bezier: [x1, y1, x2, y2],
            },
            named => EaseRepr::Str(named.name().unwrap_or("linear").to_string()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match EaseRepr::deserialize(deserializer)? {
            EaseRepr::Str(s) => Ok(Self::from_name_lenient(&s)),
            EaseRepr::CubicBezier { cubic_bezier } => {
                if cubic_bezier.iter().any(|v| !v.is_finite()) {
                    return Err(serde::de::Error::custom(
                        "cubic_bezier control points must be finite",
                    ));
                }
                let [x1, y1, x2, y2] = cubic_bezier;
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
