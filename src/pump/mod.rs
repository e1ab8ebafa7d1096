//! The frame-scheduling loop and its tick event sources.

pub mod frame_pump;
pub mod ticker;
