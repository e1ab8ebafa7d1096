//! The canvas seam: draw a source frame, read pixels back, write them out.

use crate::capture::source::FrameSource;
use crate::foundation::error::{ChromaError, ChromaResult};
use crate::surface::buffer::{PixelBuffer, expected_len};

/// A drawable frame surface with raw pixel access.
///
/// The pump drives one `draw_frame` / `read_pixels` / `write_pixels` cycle per tick. All region
/// arguments are validated against the surface bounds.
pub trait FrameSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Scale the source's current frame into the given region.
    fn draw_frame(
        &mut self,
        source: &mut dyn FrameSource,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> ChromaResult<()>;

    /// Copy the region out as an owned buffer.
    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> ChromaResult<PixelBuffer>;

    /// Copy `buffer` back into the surface with its top-left corner at `(x, y)`.
    fn write_pixels(&mut self, buffer: &PixelBuffer, x: u32, y: u32) -> ChromaResult<()>;
}

/// An in-memory RGBA8 canvas, cleared to transparent black.
pub struct MemoryCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MemoryCanvas {
    /// Create a canvas of the given size.
    pub fn new(width: u32, height: u32) -> ChromaResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChromaError::validation("canvas dimensions must be > 0"));
        }
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Borrow the full surface bytes, row-major RGBA8.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn check_region(&self, x: u32, y: u32, width: u32, height: u32) -> ChromaResult<()> {
        let x_end = x.checked_add(width);
        let y_end = y.checked_add(height);
        match (x_end, y_end) {
            (Some(xe), Some(ye)) if xe <= self.width && ye <= self.height => Ok(()),
            _ => Err(ChromaError::surface(format!(
                "region {width}x{height}+{x}+{y} exceeds {}x{} surface",
                self.width, self.height
            ))),
        }
    }
}

impl FrameSurface for MemoryCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_frame(
        &mut self,
        source: &mut dyn FrameSource,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> ChromaResult<()> {
        self.check_region(x, y, width, height)?;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let frame = source.frame()?;
        let fw = frame.width as usize;
        let fh = frame.height as usize;
        if fw == 0 || fh == 0 {
            return Err(ChromaError::surface("source produced an empty frame"));
        }
        if frame.data.len() != expected_len(frame.width, frame.height)? {
            return Err(ChromaError::surface(format!(
                "source frame bytes do not match {}x{}x4",
                frame.width, frame.height
            )));
        }

        // Nearest-neighbor scale of the whole source frame into the region.
        let stride = self.width as usize;
        for row in 0..height as usize {
            let sy = row * fh / height as usize;
            for col in 0..width as usize {
                let sx = col * fw / width as usize;
                let src = (sy * fw + sx) * 4;
                let dst = ((y as usize + row) * stride + x as usize + col) * 4;
                self.data[dst..dst + 4].copy_from_slice(&frame.data[src..src + 4]);
            }
        }
        Ok(())
    }

    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> ChromaResult<PixelBuffer> {
        self.check_region(x, y, width, height)?;
        let stride = self.width as usize;
        let mut out = Vec::with_capacity(expected_len(width, height)?);
        for row in 0..height as usize {
            let start = ((y as usize + row) * stride + x as usize) * 4;
            out.extend_from_slice(&self.data[start..start + width as usize * 4]);
        }
        PixelBuffer::new(width, height, out)
    }

    fn write_pixels(&mut self, buffer: &PixelBuffer, x: u32, y: u32) -> ChromaResult<()> {
        self.check_region(x, y, buffer.width(), buffer.height())?;
        let stride = self.width as usize;
        let row_bytes = buffer.width() as usize * 4;
        for row in 0..buffer.height() as usize {
            let src = row * row_bytes;
            let dst = ((y as usize + row) * stride + x as usize) * 4;
            self.data[dst..dst + row_bytes].copy_from_slice(&buffer.bytes()[src..src + row_bytes]);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/canvas.rs"]
mod tests;
