//! Sphere Dash - A single-screen obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, spawner, collisions, per-tick rules)
//! - `game`: Screen state machine and process context
//! - `renderer`: Canvas abstraction, bitmap font and WebGPU pipeline
//! - `platform`: Input mapping and frame pacing
//! - `highscores`: High score persistence
//! - `settings`: JSON settings file

pub mod app;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Screen};
pub use highscores::{HighScoreError, HighScoreFile, HighScoreStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Obstacles and the player rest on this line
    pub const FLOOR_Y: f32 = HEIGHT;

    /// Per-frame constants below are expressed in frames of this rate
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Default frame pacing target
    pub const TARGET_FPS: u32 = 60;
    /// Longest frame the simulation will integrate in one go (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// Fixed simulation timestep: one reference frame
    pub const SIM_DT: f32 = 1.0 / REFERENCE_FPS;
    /// Cap on simulation ticks per rendered frame (covers a full `MAX_FRAME_DT`)
    pub const MAX_SUBSTEPS: u32 = 15;

    /// Downward acceleration, px per reference frame²
    pub const GRAVITY: f32 = 0.4;
    /// Upward velocity on jump, px per reference frame
    pub const JUMP_STRENGTH: f32 = 12.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_START_X: f32 = WIDTH / 4.0;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 2;

    /// Obstacle size and base speed ranges (inclusive)
    pub const OBSTACLE_WIDTH_RANGE: (u32, u32) = (20, 40);
    pub const OBSTACLE_HEIGHT_RANGE: (u32, u32) = (20, 50);
    pub const OBSTACLE_SPEED_RANGE: (u32, u32) = (3, 6);

    /// Spawn pacing
    pub const BASE_SPAWN_INTERVAL: f32 = 1.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.5;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.1;
    /// Points per difficulty tier
    pub const POINTS_PER_TIER: u64 = 10;
}

/// Number of reference frames covered by `dt` seconds
#[inline]
pub fn frame_step(dt: f32) -> f32 {
    dt * consts::REFERENCE_FPS
}
