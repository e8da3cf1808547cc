/// Convenience result type used across turrell.
pub type TurrellResult<T> = Result<T, TurrellError>;

/// Top-level error taxonomy used by the crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum TurrellError {
    /// A color string that is not `RRGGBB` / `#RRGGBB`.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Configuration values that cannot produce a valid scene.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised by output sinks (png writer, ffmpeg).
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TurrellError {
    /// Build a [`TurrellError::InvalidColorFormat`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColorFormat(msg.into())
    }

    /// Build a [`TurrellError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`TurrellError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TurrellError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
