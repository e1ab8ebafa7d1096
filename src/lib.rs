//! Chromalens is a real-time color-vision-deficiency (CVD) filter engine for live video feeds.
//!
//! The engine turns a stream of captured frames into filtered pixels through a small,
//! single-threaded pipeline:
//!
//! 1. **Acquire**: [`acquire_stream`] probes an ordered chain of [`CaptureProvider`]s and opens
//!    the first available [`FrameSource`]
//! 2. **Tick**: [`FramePump`] draws the source's current frame into a [`FrameSurface`], reads the
//!    region back as a [`PixelBuffer`], and applies the [`FilterRegistry`]'s active [`Filter`]
//!    in place
//! 3. **Reschedule**: the loop parks on a [`TickSource`] until the next frame is due
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded, cooperative**: at most one tick is ever in flight; the active filter is
//!   swapped by plain assignment between ticks, never mid-frame.
//! - **Total filter math**: no filter invocation can fail; division-by-zero in the HSV path is
//!   guarded explicitly, and only the daltonize filter clamps its output.
//! - **Alpha is sacred**: every filter touches R, G, B only.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod capture;
mod color;
mod filter;
mod foundation;
mod pump;
mod surface;

pub use capture::provider::{CaptureConstraints, CaptureProvider, acquire_stream};
pub use capture::source::{FrameSource, RawFrame, SourceState};
pub use capture::still::{StillImageProvider, StillImageSource};
pub use capture::synth::{TestPatternProvider, TestPatternSource};
pub use color::hsv::{hsv_to_rgb, rgb_to_hsv};
pub use color::lms::{Deficiency, LMS_TO_RGB, RGB_TO_LMS};
pub use color::matrix::{ColorMatrix, DEUTERANOPIA_SIM};
pub use filter::library::{DEFAULT_SPECTRUM_EXPONENT, Filter};
pub use filter::mode::{FilterMode, MODE_KEYS, parse_mode};
pub use filter::registry::FilterRegistry;
pub use foundation::core::FrameSize;
pub use foundation::error::{CaptureError, ChromaError, ChromaResult};
pub use pump::frame_pump::{FramePump, PumpOpts, PumpState, PumpStats, TickOutcome};
pub use pump::ticker::{ImmediateTicker, IntervalTicker, TickSource};
pub use surface::buffer::PixelBuffer;
pub use surface::canvas::{FrameSurface, MemoryCanvas};
