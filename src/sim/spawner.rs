//! Obstacle spawning and difficulty scaling
//!
//! Difficulty moves in tiers of `POINTS_PER_TIER` points. Each tier spawns
//! obstacles 0.1s sooner (down to `MIN_SPAWN_INTERVAL`) and raises the speed
//! multiplier by one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::state::Obstacle;
use crate::consts::*;

/// Difficulty tier for a score (0-based)
#[inline]
fn tier(score: u64) -> u64 {
    score / POINTS_PER_TIER
}

/// Speed multiplier implied by a score
pub fn score_multiplier(score: u64) -> u32 {
    (tier(score) + 1).min(u32::MAX as u64) as u32
}

/// Seconds between spawns at a given score
pub fn spawn_interval(score: u64) -> f32 {
    let tier = tier(score).min(u32::MAX as u64) as f32;
    (BASE_SPAWN_INTERVAL - tier * SPAWN_INTERVAL_STEP).max(MIN_SPAWN_INTERVAL)
}

/// Spawn timer, difficulty ratchet and the RNG that shapes new obstacles
#[derive(Debug, Clone, Serialize)]
pub struct Spawner {
    /// Seconds since the last spawn
    pub timer: f32,
    /// Applied to each new obstacle's base speed; only ratchets up between resets
    pub multiplier: u32,
    #[serde(skip_serializing)]
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            timer: 0.0,
            multiplier: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Accumulate `dt`, ratchet the multiplier, and report whether an obstacle
    /// is due. The timer restarts when one is.
    pub fn advance(&mut self, score: u64, dt: f32) -> bool {
        self.timer += dt;
        self.multiplier = self.multiplier.max(score_multiplier(score));

        if self.timer > spawn_interval(score) {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Build an obstacle at the right edge with random size and speed
    pub fn spawn(&mut self, id: u32) -> Obstacle {
        let (w_min, w_max) = OBSTACLE_WIDTH_RANGE;
        let (h_min, h_max) = OBSTACLE_HEIGHT_RANGE;
        let (s_min, s_max) = OBSTACLE_SPEED_RANGE;

        let width = self.rng.random_range(w_min..=w_max) as f32;
        let height = self.rng.random_range(h_min..=h_max) as f32;
        let base_speed = self.rng.random_range(s_min..=s_max) as f32;

        Obstacle::new(id, width, height, base_speed * self.multiplier as f32)
    }

    /// Back to a fresh timer and multiplier; the RNG stream continues
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.multiplier = 1;
    }
}
