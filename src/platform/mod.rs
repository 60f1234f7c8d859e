//! Platform abstraction layer
//!
//! Handles the native side of:
//! - Input events (key mapping, held keys, discrete commands)
//! - Time (frame delta and pacing)

pub mod input;
pub mod time;

pub use input::{Command, FrameInput, InputState};
pub use time::FrameClock;
