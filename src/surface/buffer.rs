//! Owned RGBA8 pixel buffers exchanged with a frame surface.

use crate::foundation::error::{ChromaError, ChromaResult};

/// An owned RGBA8 pixel rectangle.
///
/// Channel order is R, G, B, A with stride 4; the byte length is always `width * height * 4`.
/// Buffers are transient: the surface mints one per read-back, the filter mutates it in place,
/// and it is discarded after the write-back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` buffer, validating the length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ChromaResult<Self> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(ChromaError::validation(format!(
                "pixel buffer length {} does not match {width}x{height}x4",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a zeroed (transparent black) buffer.
    pub fn zeroed(width: u32, height: u32) -> ChromaResult<Self> {
        let expected = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; expected],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the raw bytes, row-major.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw bytes for one filter invocation.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

pub(crate) fn expected_len(width: u32, height: u32) -> ChromaResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ChromaError::validation("pixel buffer size overflow"))
}
