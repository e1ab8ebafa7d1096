/// Convenience result type used across Chromalens.
pub type ChromaResult<T> = Result<T, ChromaError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChromaError {
    /// Invalid user-provided parameters or buffer geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Region or buffer accesses outside a surface's bounds.
    #[error("surface error: {0}")]
    Surface(String),

    /// Failure acquiring or reading a capture stream.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromaError {
    /// Build a [`ChromaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChromaError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}

/// Failures while acquiring a live capture stream.
///
/// Every variant is terminal to the capture session: the pump never starts, and recovery is an
/// explicit re-acquisition by the caller. There is no automatic retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No capture provider in the probe chain reported itself available.
    #[error("no compatible capture backend available")]
    Unavailable,

    /// A provider was available but refused the stream request.
    #[error("capture request denied: {0}")]
    Denied(String),

    /// The capture device exists but is held by another consumer.
    #[error("capture device busy: {0}")]
    Busy(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
