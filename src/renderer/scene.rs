//! Screen layouts
//!
//! One function per screen. Text is centered horizontally and placed at a
//! fixed offset from the middle of the canvas.

use glam::Vec2;

use super::background::Background;
use super::canvas::{Canvas, TextSize};
use super::vertex::colors;
use crate::consts::{HEIGHT, WIDTH};
use crate::game::{Game, Screen};
use crate::highscores::HighScoreStore;
use crate::sim::GameState;

/// Point on the vertical center line, `dy` below the middle
fn center_line(dy: f32) -> Vec2 {
    Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 + dy)
}

/// Draw whatever the current screen is. `fps` is shown in play when given.
pub fn draw<S: HighScoreStore>(
    canvas: &mut impl Canvas,
    game: &Game<S>,
    background: Option<&Background>,
    fps: Option<f32>,
) {
    match game.screen() {
        Screen::Menu => draw_menu(canvas, game.high_score(), background),
        Screen::Playing => draw_playing(canvas, game.session(), fps),
        Screen::GameOver | Screen::AwaitingRestart => draw_game_over(
            canvas,
            game.session().score,
            game.high_score(),
            game.new_high_score(),
        ),
        Screen::Exited => {}
    }
}

pub fn draw_menu(canvas: &mut impl Canvas, high_score: u64, background: Option<&Background>) {
    canvas.clear(colors::BACKGROUND);
    if let Some(background) = background {
        background.draw(canvas);
    }

    canvas.draw_text_centered(
        "Obstacle Avoidance Game",
        center_line(-100.0),
        TextSize::Large,
        colors::TEXT,
    );
    canvas.draw_text_centered(
        "Press 'S' to Start or 'Q' to Quit",
        center_line(0.0),
        TextSize::Normal,
        colors::TEXT,
    );
    canvas.draw_text_centered(
        "Good luck making it to 50 points",
        center_line(50.0),
        TextSize::Normal,
        colors::TEXT,
    );
    canvas.draw_text_centered(
        &format!("High Score: {}", high_score),
        center_line(100.0),
        TextSize::Normal,
        colors::TEXT,
    );
}

pub fn draw_playing(canvas: &mut impl Canvas, state: &GameState, fps: Option<f32>) {
    canvas.clear(colors::BACKGROUND);

    let player = &state.player;
    canvas.fill_circle(player.pos, player.radius, colors::SPHERE);

    for obstacle in &state.obstacles {
        canvas.fill_rect(
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.width,
            obstacle.height,
            colors::OBSTACLE,
        );
    }

    canvas.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 10.0),
        TextSize::Normal,
        colors::TEXT,
    );
    canvas.draw_text(
        &format!("Lives: {}", state.lives),
        Vec2::new(10.0, 40.0),
        TextSize::Normal,
        colors::TEXT,
    );

    if let Some(fps) = fps {
        let text = format!("FPS: {:.0}", fps);
        let width = canvas.measure_text(&text, TextSize::Normal).x;
        canvas.draw_text(
            &text,
            Vec2::new(WIDTH - width - 10.0, 10.0),
            TextSize::Normal,
            colors::TEXT,
        );
    }
}

pub fn draw_game_over(canvas: &mut impl Canvas, score: u64, high_score: u64, new_high_score: bool) {
    canvas.clear(colors::BACKGROUND);

    canvas.draw_text_centered("Game Over", center_line(-80.0), TextSize::Large, colors::TEXT);
    canvas.draw_text_centered(
        &format!("Final Score: {}", score),
        center_line(-20.0),
        TextSize::Normal,
        colors::TEXT,
    );
    canvas.draw_text_centered(
        &format!("High Score: {}", high_score),
        center_line(20.0),
        TextSize::Normal,
        colors::TEXT,
    );
    canvas.draw_text_centered(
        "Press R to Restart or Q to Quit",
        center_line(60.0),
        TextSize::Normal,
        colors::TEXT,
    );

    if new_high_score {
        canvas.draw_text_centered(
            "New High Score!",
            center_line(120.0),
            TextSize::Normal,
            colors::HIGHLIGHT,
        );
    }
}
