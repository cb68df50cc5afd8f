/// Convenience result type used across wavyte-motion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the few fallible engine entry points.
///
/// Evaluation itself never fails: malformed configs are coerced and unknown kinds degrade to an
/// empty property set. Errors are reserved for programming mistakes caught at construction time.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided values (frame rates, ranges, threading options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Physically degenerate spring parameters.
    #[error("spring error: {0}")]
    Spring(String),

    /// Errors while sampling frame ranges.
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Errors when serializing or deserializing configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Spring`] value.
    pub fn spring(msg: impl Into<String>) -> Self {
        Self::Spring(msg.into())
    }

    /// Build a [`MotionError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
