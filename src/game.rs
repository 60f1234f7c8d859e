//! Screen state machine
//!
//! `Game` is the process-wide context: it owns the current session, the high
//! score and the store it is persisted to. The high score is loaded when the
//! game is created and saved when a session ends with a new record.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::frame_step;
use crate::highscores::HighScoreStore;
use crate::platform::{Command, FrameInput};
use crate::sim::{GameEvent, GameState, tick};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay (life-loss resets happen inside this state)
    Playing,
    /// Session just ended; high score has been settled
    GameOver,
    /// Game-over screen, waiting for restart
    AwaitingRestart,
    /// Quit requested; the shell should exit
    Exited,
}

pub struct Game<S: HighScoreStore> {
    screen: Screen,
    session: GameState,
    high_score: u64,
    /// Last finished session beat the previous high score
    new_high_score: bool,
    store: S,
    next_seed: u64,
    /// Unsimulated time, in reference frames
    accumulator: f32,
}

impl<S: HighScoreStore> Game<S> {
    /// Create the game on the menu screen, loading the stored high score
    pub fn new(store: S, seed: u64) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("{}; treating high score as 0", e);
                0
            }
        };

        Self {
            screen: Screen::Menu,
            session: GameState::new(seed),
            high_score,
            new_high_score: false,
            store,
            next_seed: seed,
            accumulator: 0.0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &GameState {
        &self.session
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.screen != Screen::Exited
    }

    /// Run one frame: screen commands first, then the simulation if playing
    pub fn frame(&mut self, input: &FrameInput, dt: f32) {
        if self.screen == Screen::Exited {
            return;
        }

        // Quit wins over everything else this frame
        if input.quit_requested() {
            log::info!("Quit requested from {:?}", self.screen);
            self.screen = Screen::Exited;
            return;
        }

        // Game over is settled on entry; it lasts a single frame
        if self.screen == Screen::GameOver {
            self.screen = Screen::AwaitingRestart;
        }

        match self.screen {
            Screen::Menu => {
                if input.commands.contains(&Command::Start) {
                    self.start_session();
                }
            }
            Screen::Playing => self.play(input, dt),
            Screen::AwaitingRestart => {
                if input.commands.contains(&Command::Restart) {
                    log::info!("Restarting");
                    self.screen = Screen::Menu;
                }
            }
            Screen::GameOver | Screen::Exited => {}
        }
    }

    fn start_session(&mut self) {
        let seed = self.next_seed;
        self.next_seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);

        self.session = GameState::new(seed);
        self.new_high_score = false;
        self.accumulator = 0.0;
        self.screen = Screen::Playing;
        log::info!("Started new game with seed: {}", seed);
    }

    /// Run as many fixed ticks as `dt` covers, carrying the remainder
    fn play(&mut self, input: &FrameInput, dt: f32) {
        self.accumulator += frame_step(dt);

        let mut substeps = 0;
        while self.accumulator >= 1.0 && substeps < MAX_SUBSTEPS {
            self.step(input);
            self.accumulator -= 1.0;
            substeps += 1;

            if self.screen != Screen::Playing {
                self.accumulator = 0.0;
                return;
            }
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= 1.0 {
            log::debug!("Dropping {:.1} frames of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
    }

    fn step(&mut self, input: &FrameInput) {
        for event in tick(&mut self.session, &input.held, SIM_DT) {
            match event {
                GameEvent::ObstacleCleared { id } => {
                    log::debug!("Obstacle {} cleared, score {}", id, self.session.score);
                }
                GameEvent::Collision { id, lives_left } => {
                    log::info!("Hit obstacle {}, {} lives left", id, lives_left);
                }
                GameEvent::LifeLost { lives_left } => {
                    log::debug!("Field reset with {} lives left", lives_left);
                }
                GameEvent::OutOfLives { score } => self.enter_game_over(score),
            }
        }
    }

    fn enter_game_over(&mut self, score: u64) {
        log::info!("Game over with score {}", score);
        match serde_json::to_string(&self.session) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
        self.screen = Screen::GameOver;
        self.new_high_score = score > self.high_score;

        if self.new_high_score {
            self.high_score = score;
            if let Err(e) = self.store.save(score) {
                log::error!("Could not persist high score {}: {}", score, e);
            }
        }
    }
}
