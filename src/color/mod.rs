//! Color-space primitives: 3x3 RGB matrices, HSV remapping, and the LMS cone space.

pub mod hsv;
pub mod lms;
pub mod matrix;
