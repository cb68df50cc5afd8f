use std::io::Read;

use crate::animation::config::AnimationConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use serde::{Deserialize, Serialize};

/// Entry plus exit animation for one element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualPhaseRequest {
    /// Animation played from the element's appearance.
    pub entry: AnimationConfig,
    /// Animation played from `exit_frame + exit.delay`.
    #[serde(default = "AnimationConfig::none")]
    pub exit: AnimationConfig,
    /// Frame at which the exit phase is scheduled; 0 disables the exit.
    #[serde(default)]
    pub exit_frame: FrameIndex,
}

impl DualPhaseRequest {
    /// Bundle an entry and exit.
    pub fn new(entry: AnimationConfig, exit: AnimationConfig, exit_frame: FrameIndex) -> Self {
        Self {
            entry,
            exit,
            exit_frame,
        }
    }

    /// Copy with both phases' timing coerced.
    pub fn sanitized(&self) -> Self {
        Self {
            entry: self.entry.sanitized(),
            exit: self.exit.sanitized(),
            exit_frame: self.exit_frame,
        }
    }
}

/// Either call shape of the evaluator.
///
/// In JSON a dual-phase motion is recognised by its `entry` key; anything else is read as a
/// single [`AnimationConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Motion {
    /// One animation.
    Single(AnimationConfig),
    /// Entry followed by exit.
    Dual(DualPhaseRequest),
}

impl Motion {
    /// Load a motion from a JSON reader, coercing malformed timing.
    pub fn from_reader(reader: impl Read) -> MotionResult<Self> {
        let m: Self = serde_json::from_reader(reader)
            .map_err(|e| MotionError::serde(format!("motion: {e}")))?;
        Ok(m.sanitized())
    }

    /// Load a motion from a JSON string, coercing malformed timing.
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Copy with timing coerced.
    pub fn sanitized(&self) -> Self {
        match self {
            Self::Single(cfg) => Self::Single(cfg.sanitized()),
            Self::Dual(req) => Self::Dual(req.sanitized()),
        }
    }
}

impl From<AnimationConfig> for Motion {
    fn from(cfg: AnimationConfig) -> Self {
        Self::Single(cfg)
    }
}

impl From<DualPhaseRequest> for Motion {
    fn from(req: DualPhaseRequest) -> Self {
        Self::Dual(req)
    }
}

impl<'de> Deserialize<'de> for Motion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer)?;
        if v.get("entry").is_some() {
            DualPhaseRequest::deserialize(v)
                .map(Self::Dual)
                .map_err(serde::de::Error::custom)
        } else {
            AnimationConfig::deserialize(v)
                .map(Self::Single)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/motion.rs"]
mod tests;
