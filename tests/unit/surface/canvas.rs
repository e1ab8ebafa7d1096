use super::*;
use crate::capture::source::{FrameSource, RawFrame, SourceState};

/// A 2x2 source with one solid color per quadrant pixel.
struct QuadSource {
    data: Vec<u8>,
}

impl QuadSource {
    fn new() -> Self {
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,   0, 255, 0, 255,
            0, 0, 255, 255,   255, 255, 0, 255,
        ];
        Self { data }
    }
}

impl FrameSource for QuadSource {
    fn state(&self) -> SourceState {
        SourceState::Playing
    }

    fn frame(&mut self) -> crate::foundation::error::ChromaResult<RawFrame<'_>> {
        Ok(RawFrame {
            width: 2,
            height: 2,
            data: &self.data,
        })
    }
}

#[test]
fn read_write_round_trip() {
    let mut canvas = MemoryCanvas::new(8, 8).unwrap();
    let buffer = PixelBuffer::new(2, 2, vec![9u8; 16]).unwrap();

    canvas.write_pixels(&buffer, 3, 4).unwrap();
    let back = canvas.read_pixels(3, 4, 2, 2).unwrap();
    assert_eq!(back, buffer);

    // Neighboring pixels stay cleared.
    let outside = canvas.read_pixels(0, 0, 2, 2).unwrap();
    assert!(outside.bytes().iter().all(|&b| b == 0));
}

#[test]
fn out_of_bounds_regions_are_rejected() {
    let mut canvas = MemoryCanvas::new(4, 4).unwrap();
    assert!(canvas.read_pixels(0, 0, 5, 4).is_err());
    assert!(canvas.read_pixels(4, 0, 1, 1).is_err());

    let buffer = PixelBuffer::zeroed(2, 2).unwrap();
    assert!(canvas.write_pixels(&buffer, 3, 3).is_err());
    assert!(canvas.write_pixels(&buffer, u32::MAX, 0).is_err());

    let mut source = QuadSource::new();
    assert!(canvas.draw_frame(&mut source, 0, 0, 8, 8).is_err());
}

#[test]
fn draw_frame_scales_nearest_neighbor() {
    let mut canvas = MemoryCanvas::new(4, 4).unwrap();
    let mut source = QuadSource::new();
    canvas.draw_frame(&mut source, 0, 0, 4, 4).unwrap();

    // Each source pixel becomes a 2x2 block.
    let px = |x: usize, y: usize| {
        let i = (y * 4 + x) * 4;
        [
            canvas.bytes()[i],
            canvas.bytes()[i + 1],
            canvas.bytes()[i + 2],
        ]
    };
    assert_eq!(px(0, 0), [255, 0, 0]);
    assert_eq!(px(1, 1), [255, 0, 0]);
    assert_eq!(px(2, 0), [0, 255, 0]);
    assert_eq!(px(3, 1), [0, 255, 0]);
    assert_eq!(px(0, 2), [0, 0, 255]);
    assert_eq!(px(2, 3), [255, 255, 0]);
}

#[test]
fn pixel_buffer_validates_length() {
    assert!(PixelBuffer::new(2, 2, vec![0u8; 15]).is_err());
    assert!(PixelBuffer::new(2, 2, vec![0u8; 16]).is_ok());
}
