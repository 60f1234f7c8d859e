//! Frame timing
//!
//! Measures wall-clock delta between frames and blocks at the end of each
//! frame until the target rate's next boundary.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Weight of the newest sample in the FPS average
const FPS_SMOOTHING: f32 = 0.1;

#[derive(Debug)]
pub struct FrameClock {
    frame_duration: Duration,
    /// Start of the current frame
    frame_start: Instant,
    /// Smoothed frames per second
    fps: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / target_fps as f64),
            frame_start: Instant::now(),
            fps: target_fps as f32,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Start a frame now; returns seconds since the previous frame started
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    /// Start a frame at `now`; the delta is clamped to `MAX_FRAME_DT`
    pub fn begin_frame_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.frame_start).as_secs_f32();
        self.frame_start = now;

        if elapsed > 0.0 {
            let sample = 1.0 / elapsed;
            self.fps += (sample - self.fps) * FPS_SMOOTHING;
        }
        elapsed.min(MAX_FRAME_DT)
    }

    /// Time left in the current frame's budget
    pub fn remaining(&self) -> Duration {
        self.frame_duration
            .saturating_sub(self.frame_start.elapsed())
    }

    /// Block until the current frame's budget is used up
    pub fn wait_for_next_frame(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
