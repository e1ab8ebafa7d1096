//! The filter library: stateless per-pixel transforms over RGBA8 buffers.

use crate::color::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::color::lms::{Deficiency, LMS_TO_RGB, RGB_TO_LMS};
use crate::color::matrix::ColorMatrix;

/// Hue exponent bound to the bare `spectrumShift` mode key.
///
/// Exponents below 1 widen hue separation in the red-yellow band, where most CVD confusion
/// lives.
pub const DEFAULT_SPECTRUM_EXPONENT: f64 = 0.7;

/// A stateless per-pixel transform applied in place to RGBA8 buffers.
///
/// Every variant walks the buffer with stride 4 and rewrites only the R, G, B channels of each
/// pixel. Alpha and any trailing partial pixel are left untouched, pixels are never reordered,
/// and no index outside the buffer is ever read or written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Pass every pixel through unchanged.
    Identity,
    /// Replace `(R, G, B)` with `matrix * (R, G, B)`.
    ///
    /// The result is written back without an explicit clamp step; values outside the 8-bit
    /// range saturate at the channel bounds. This mirrors the reference behavior and is a known
    /// fidelity limitation, not a bug to fix.
    LinearMatrix(ColorMatrix),
    /// Remap hue through `h' = h^exponent`, leaving saturation and value alone.
    SpectrumShift {
        /// Power applied to the normalized hue.
        exponent: f64,
    },
    /// Simulate dichromatic perception in LMS space, then re-inject the perceptual error as a
    /// correction. The only filter that clamps and truncates its output, because it is the one
    /// meant for direct display.
    Daltonize(Deficiency),
}

impl Filter {
    /// Apply this filter in place over an RGBA8 pixel buffer.
    pub fn apply(&self, data: &mut [u8]) {
        match *self {
            Filter::Identity => {}
            Filter::LinearMatrix(matrix) => {
                for px in data.chunks_exact_mut(4) {
                    let [r, g, b] =
                        matrix.apply([f64::from(px[0]), f64::from(px[1]), f64::from(px[2])]);
                    px[0] = r as u8;
                    px[1] = g as u8;
                    px[2] = b as u8;
                }
            }
            Filter::SpectrumShift { exponent } => {
                for px in data.chunks_exact_mut(4) {
                    let (h, s, v) =
                        rgb_to_hsv(f64::from(px[0]), f64::from(px[1]), f64::from(px[2]));
                    let (r, g, b) = hsv_to_rgb(h.powf(exponent), s, v);
                    px[0] = r as u8;
                    px[1] = g as u8;
                    px[2] = b as u8;
                }
            }
            Filter::Daltonize(deficiency) => {
                let sim = deficiency.simulation_matrix();
                for px in data.chunks_exact_mut(4) {
                    let rgb = [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])];
                    let lms = RGB_TO_LMS.apply(rgb);
                    let seen = LMS_TO_RGB.apply(sim.apply(lms));

                    // Error redistribution: the red-channel error folds into green and blue.
                    let err_r = rgb[0] - seen[0];
                    let err_g = rgb[1] - seen[1];
                    let err_b = rgb[2] - seen[2];

                    px[0] = clamp_u8(rgb[0]);
                    px[1] = clamp_u8(rgb[1] + 0.7 * err_r + err_g);
                    px[2] = clamp_u8(rgb[2] + 0.7 * err_r + err_b);
                }
            }
        }
    }
}

fn clamp_u8(x: f64) -> u8 {
    x.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/filter/library.rs"]
mod tests;
