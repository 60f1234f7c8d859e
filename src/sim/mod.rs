//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Elapsed-time driven (every rate scaled by `frame_step(dt)`)
//! - Seeded RNG only
//! - Obstacles kept in spawn order

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collides};
pub use spawner::{Spawner, score_multiplier, spawn_interval};
pub use state::{GameEvent, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
