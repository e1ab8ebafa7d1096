//! Capability-probing acquisition: an ordered chain of capture providers.

use crate::capture::source::FrameSource;
use crate::foundation::error::CaptureError;

/// Stream request constraints.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CaptureConstraints {
    /// Request a video track.
    pub video: bool,
    /// Request an audio track. Chromalens itself never consumes audio.
    pub audio: bool,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            video: true,
            audio: false,
        }
    }
}

/// One way of acquiring a capture stream.
///
/// Providers are probed in order; the first whose [`CaptureProvider::is_available`] returns
/// `true` gets to open the stream.
pub trait CaptureProvider {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this provider can serve on the current host.
    fn is_available(&self) -> bool;

    /// Open a stream satisfying `constraints`.
    fn open(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<Box<dyn FrameSource>, CaptureError>;
}

/// Probe `providers` in order and open a stream from the first available one.
///
/// No available provider maps to [`CaptureError::Unavailable`]; a failure from the selected
/// provider's `open` is returned as-is. Either way the session never starts: there is no
/// automatic retry, and later providers are not consulted once one has claimed the request.
pub fn acquire_stream(
    providers: &[Box<dyn CaptureProvider>],
    constraints: &CaptureConstraints,
) -> Result<Box<dyn FrameSource>, CaptureError> {
    for provider in providers {
        if !provider.is_available() {
            continue;
        }
        tracing::info!(provider = provider.name(), "using capture provider");
        return provider.open(constraints);
    }
    tracing::error!("video capture error: no provider available");
    Err(CaptureError::Unavailable)
}

#[cfg(test)]
#[path = "../../tests/unit/capture/provider.rs"]
mod tests;
