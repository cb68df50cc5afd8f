use serde::{Deserialize, Serialize};

/// A translation distance, either absolute or relative to the element's own size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percent of the element's own extent on the relevant axis.
    Percent(f64),
}

impl Length {
    /// The full element extent (`100%`), the default slide distance.
    pub const FULL: Self = Self::Percent(100.0);

    /// Raw magnitude regardless of unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Percent(v) => v,
        }
    }

    /// Multiply the magnitude, keeping the unit.
    pub fn scaled(self, factor: f64) -> Self {
        // `+ 0.0` folds -0.0 into 0.0.
        match self {
            Self::Px(v) => Self::Px(v * factor + 0.0),
            Self::Percent(v) => Self::Percent(v * factor + 0.0),
        }
    }

    /// Add two lengths of the same unit. Mixed units cannot be summed without layout.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Px(a), Self::Px(b)) => Some(Self::Px(a + b)),
            (Self::Percent(a), Self::Percent(b)) => Some(Self::Percent(a + b)),
            _ => None,
        }
    }

    /// Resolve to pixels given the element extent on the same axis.
    pub fn resolve(self, extent_px: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(v) => extent_px * v / 100.0,
        }
    }

    /// CSS literal, e.g. `-100px` or `50%`.
    pub fn css(self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Percent(v) => format!("{v}%"),
        }
    }

    fn parse_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(v) = s.strip_suffix('%') {
            return v.trim().parse().ok().map(Self::Percent);
        }
        let v = s.strip_suffix("px").unwrap_or(s);
        v.trim().parse().ok().map(Self::Px)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
            Px { px: f64 },
            Percent { percent: f64 },
        }

        let v = match Repr::deserialize(deserializer)? {
            Repr::Num(v) | Repr::Px { px: v } => Self::Px(v),
            Repr::Percent { percent } => Self::Percent(percent),
            Repr::Str(s) => Self::parse_str(&s).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid length \"{s}\" (expected e.g. 40, \"40px\" or \"50%\")"))
            })?,
        };
        if !v.value().is_finite() {
            return Err(serde::de::Error::custom("length must be finite"));
        }
        Ok(v)
    }
}
