/// Convenience result type used throughout shapereel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error type for shapereel.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A progression was constructed with a non-positive or non-finite duration.
    #[error("invalid duration: {0} (must be finite and > 0)")]
    InvalidDuration(f64),

    /// A track builder was finished without any segments.
    #[error("empty track: {0} track has no segments")]
    EmptyTrack(&'static str),

    /// The frame-capture collaborator failed.
    #[error("capture error: {0}")]
    Capture(String),

    /// The external video encoder exited unsuccessfully.
    #[error("encode failed (exit code {exit_code:?}): {stderr}")]
    EncodeFailed {
        /// Process exit code, if the process exited normally.
        exit_code: Option<i32>,
        /// Captured standard error of the encoder process.
        stderr: String,
    },

    /// An export was stopped by its progress callback.
    #[error("export cancelled before frame {frame}")]
    Cancelled {
        /// Index of the first frame that was not captured.
        frame: u64,
    },

    /// JSON/document serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
