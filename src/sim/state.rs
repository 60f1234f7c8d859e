//! Game state and core simulation types

use glam::Vec2;
use serde::Serialize;

use super::collision::Aabb;
use super::spawner::Spawner;
use super::tick::TickInput;
use crate::consts::*;
use crate::frame_step;

/// Something that happened during a tick, for the state machine and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Obstacle scrolled off the left edge (one point awarded)
    ObstacleCleared { id: u32 },
    /// Player hit an obstacle; it was removed and a life consumed
    Collision { id: u32, lives_left: u8 },
    /// Non-terminal collision; player, obstacles and difficulty were reset
    LifeLost { lives_left: u8 },
    /// Last life consumed
    OutOfLives { score: u64 },
}

/// The player's sphere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// Center of the sphere
    pub pos: Vec2,
    /// Vertical velocity, px per reference frame (negative is up)
    pub vel_y: f32,
    pub radius: f32,
    /// Horizontal speed, px per reference frame
    pub speed: f32,
    /// Resting on the floor; a jump is allowed
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, FLOOR_Y - PLAYER_RADIUS),
            vel_y: 0.0,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            grounded: true,
        }
    }

    /// Restore the spawn position, at rest on the floor
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, FLOOR_Y - self.radius);
        self.vel_y = 0.0;
        self.grounded = true;
    }

    /// Apply held input, gravity and the floor clamp for `dt` seconds
    pub fn advance(&mut self, input: &TickInput, dt: f32) {
        let step = frame_step(dt);

        if input.left && self.pos.x - self.radius > 0.0 {
            self.pos.x -= self.speed * step;
        }
        if input.right && self.pos.x + self.radius < WIDTH {
            self.pos.x += self.speed * step;
        }

        if input.jump && self.grounded {
            self.vel_y = -JUMP_STRENGTH;
            self.grounded = false;
        }

        self.vel_y += GRAVITY * step;
        self.pos.y += self.vel_y * step;

        if self.pos.y + self.radius >= FLOOR_Y {
            self.pos.y = FLOOR_Y - self.radius;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::centered(self.pos, self.radius)
    }
}

/// A floor-standing obstacle scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Leftward speed, px per reference frame
    pub speed: f32,
}

impl Obstacle {
    /// New obstacle at the right edge, resting on the floor
    pub fn new(id: u32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(WIDTH, FLOOR_Y - height),
            width,
            height,
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= self.speed * frame_step(dt);
    }

    /// Right edge has passed the left boundary
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.width < 0.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// State of one play session. Serializes to JSON for the final-state debug log.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub player: Player,
    /// Live obstacles in spawn order (also descending x)
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub lives: u8,
    pub spawner: Spawner,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: Player::new(),
            obstacles: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            spawner: Spawner::new(seed),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Recovery after a non-terminal collision: score survives, everything else
    /// returns to its starting point
    pub fn soft_reset(&mut self) {
        self.player.reset();
        self.obstacles.clear();
        self.spawner.reset();
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }
}
