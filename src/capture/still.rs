//! Still-image capture: a decoded image standing in for a camera feed.

use std::path::{Path, PathBuf};

use crate::capture::provider::{CaptureConstraints, CaptureProvider};
use crate::capture::source::{FrameSource, RawFrame, SourceState};
use crate::foundation::error::{CaptureError, ChromaResult};

/// Serves one decoded image as an endless (or budgeted) stream.
pub struct StillImageSource {
    width: u32,
    height: u32,
    data: Vec<u8>,
    served: u64,
    budget: Option<u64>,
}

impl StillImageSource {
    /// Decode `path` into an RGBA8 frame.
    pub fn from_path(path: &Path) -> Result<Self, CaptureError> {
        let img = image::open(path)
            .map_err(|e| CaptureError::Denied(format!("decode '{}': {e}", path.display())))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            data: img.into_raw(),
            served: 0,
            budget: None,
        })
    }

    /// Report `Ended` once `frames` frames have been served.
    pub fn with_budget(mut self, frames: u64) -> Self {
        self.budget = Some(frames);
        self
    }
}

impl FrameSource for StillImageSource {
    fn state(&self) -> SourceState {
        match self.budget {
            Some(budget) if self.served >= budget => SourceState::Ended,
            _ => SourceState::Playing,
        }
    }

    fn frame(&mut self) -> ChromaResult<RawFrame<'_>> {
        self.served += 1;
        Ok(RawFrame {
            width: self.width,
            height: self.height,
            data: &self.data,
        })
    }
}

/// Provider serving a still image from disk; available when the file exists.
#[derive(Clone, Debug)]
pub struct StillImageProvider {
    /// Image path, probed in `is_available` and decoded at open time.
    pub path: PathBuf,
    /// Optional frame budget after which the stream ends.
    pub budget: Option<u64>,
}

impl CaptureProvider for StillImageProvider {
    fn name(&self) -> &'static str {
        "still-image"
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
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
        let mut source = StillImageSource::from_path(&self.path)?;
        if let Some(budget) = self.budget {
            source = source.with_budget(budget);
        }
        Ok(Box::new(source))
    }
}
