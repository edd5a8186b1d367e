/// Convenience result type used across the engine.
pub type ScrambleResult<T> = Result<T, ScrambleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Running an animation cannot fail: every input string is valid and every
/// sampled schedule is self-consistent by construction. Errors exist only at
/// the boundaries: invalid parameters, malformed scripts, serialization.
#[derive(thiserror::Error, Debug)]
pub enum ScrambleError {
    /// Invalid user-provided parameter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or validating a playback script.
    #[error("script error: {0}")]
    Script(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrambleError {
    /// Build a [`ScrambleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrambleError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`ScrambleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
