use crate::foundation::error::{ChromaError, ChromaResult};

/// Target frame dimensions in pixels.
///
/// The pump draws and filters a region of this size, anchored at the surface origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Default capture region used by the demo pipeline.
    pub const DEFAULT: FrameSize = FrameSize {
        width: 640,
        height: 480,
    };

    /// Smaller region used by early demo builds; kept for low-cost runs.
    pub const COMPACT: FrameSize = FrameSize {
        width: 320,
        height: 160,
    };

    /// Create a validated size (both dimensions non-zero).
    pub fn new(width: u32, height: u32) -> ChromaResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChromaError::validation("FrameSize dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
