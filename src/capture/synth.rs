//! Deterministic synthetic capture: an animated test pattern in place of camera hardware.

use crate::capture::provider::{CaptureConstraints, CaptureProvider};
use crate::capture::source::{FrameSource, RawFrame, SourceState};
use crate::foundation::core::FrameSize;
use crate::foundation::error::{CaptureError, ChromaResult};
use crate::surface::buffer::PixelBuffer;

/// A deterministic animated gradient.
///
/// Red ramps along x, green along y, and blue advances with the frame counter, so consecutive
/// frames differ and every channel is exercised. Alpha is fully opaque. Two sources constructed
/// with the same size produce identical frame sequences.
pub struct TestPatternSource {
    size: FrameSize,
    frame: PixelBuffer,
    phase: u64,
    budget: Option<u64>,
    paused: bool,
}

impl TestPatternSource {
    /// Create a pattern source producing frames of `size` indefinitely.
    pub fn new(size: FrameSize) -> ChromaResult<Self> {
        Ok(Self {
            size,
            frame: PixelBuffer::zeroed(size.width, size.height)?,
            phase: 0,
            budget: None,
            paused: false,
        })
    }

    /// Report `Ended` once `frames` frames have been produced.
    pub fn with_budget(mut self, frames: u64) -> Self {
        self.budget = Some(frames);
        self
    }

    /// Pause or resume the stream.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn render(&mut self) {
        let w = self.size.width as usize;
        let blue = (self.phase.wrapping_mul(3) % 256) as u8;
        for (i, px) in self.frame.bytes_mut().chunks_exact_mut(4).enumerate() {
            px[0] = (i % w % 256) as u8;
            px[1] = (i / w % 256) as u8;
            px[2] = blue;
            px[3] = 255;
        }
    }
}

impl FrameSource for TestPatternSource {
    fn state(&self) -> SourceState {
        if self.paused {
            return SourceState::Paused;
        }
        match self.budget {
            Some(budget) if self.phase >= budget => SourceState::Ended,
            _ => SourceState::Playing,
        }
    }

    fn frame(&mut self) -> ChromaResult<RawFrame<'_>> {
        self.render();
        self.phase += 1;
        Ok(RawFrame {
            width: self.size.width,
            height: self.size.height,
            data: self.frame.bytes(),
        })
    }
}

/// Provider wrapping [`TestPatternSource`]; always available.
#[derive(Clone, Copy, Debug)]
pub struct TestPatternProvider {
    /// Native size of produced frames.
    pub size: FrameSize,
    /// Optional frame budget after which the stream ends.
    pub budget: Option<u64>,
}

impl CaptureProvider for TestPatternProvider {
    fn name(&self) -> &'static str {
        "test-pattern"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn open(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<Box<dyn FrameSource>, CaptureError> {
        if !constraints.video {
            return Err(CaptureError::Denied(
                "stream request did not include video".to_owned(),
            ));
        }
        let mut source = TestPatternSource::new(self.size)
            .map_err(|e| CaptureError::Denied(e.to_string()))?;
        if let Some(budget) = self.budget {
            source = source.with_budget(budget);
        }
        Ok(Box::new(source))
    }
}
