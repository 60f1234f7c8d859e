//! Per-frame simulation tick
//!
//! Advances one session by `dt` seconds of wall-clock time.

use super::collision::collides;
use super::state::{GameEvent, GameState};

/// Movement keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the session by one frame and report what happened
///
/// Order: player, spawner, obstacles, off-screen sweep, collision. At most one
/// collision is resolved per tick. A collision that leaves lives at zero ends
/// the session without the soft-reset.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing moves once the last life is gone
    if state.is_over() {
        return events;
    }

    state.player.advance(input, dt);

    if state.spawner.advance(state.score, dt) {
        let id = state.next_entity_id();
        let obstacle = state.spawner.spawn(id);
        log::trace!(
            "Spawned obstacle {} ({}x{}, speed {})",
            obstacle.id,
            obstacle.width,
            obstacle.height,
            obstacle.speed
        );
        state.obstacles.push(obstacle);
    }

    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
    }

    // Sweep after moving so the list isn't mutated mid-iteration
    let cleared: Vec<u32> = state
        .obstacles
        .iter()
        .filter(|o| o.off_screen())
        .map(|o| o.id)
        .collect();
    if !cleared.is_empty() {
        state.obstacles.retain(|o| !o.off_screen());
        state.score += cleared.len() as u64;
        events.extend(cleared.into_iter().map(|id| GameEvent::ObstacleCleared { id }));
    }

    let hit = state
        .obstacles
        .iter()
        .position(|o| collides(&state.player, o));
    if let Some(index) = hit {
        let obstacle = state.obstacles.remove(index);
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::Collision {
            id: obstacle.id,
            lives_left: state.lives,
        });

        if state.lives == 0 {
            events.push(GameEvent::OutOfLives { score: state.score });
        } else {
            state.soft_reset();
            events.push(GameEvent::LifeLost {
                lives_left: state.lives,
            });
        }
    }

    state.time_ticks += 1;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Obstacle, Player};

    const DT: f32 = 1.0 / 60.0;

    /// Obstacle sitting on top of the freshly spawned player
    fn push_overlapping(state: &mut GameState) -> u32 {
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::new(id, 30.0, 40.0, 3.0);
        obstacle.pos.x = PLAYER_START_X - 10.0;
        state.obstacles.push(obstacle);
        id
    }

    /// Obstacle already left of the player, heading off-screen
    fn push_behind_player(state: &mut GameState, x: f32) -> u32 {
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::new(id, 20.0, 30.0, 5.0);
        obstacle.pos.x = x;
        state.obstacles.push(obstacle);
        id
    }

    #[test]
    fn test_obstacle_spawns_after_interval() {
        let mut state = GameState::new(3);
        let input = TickInput::default();
        for _ in 0..4 {
            tick(&mut state, &input, 0.25);
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &input, 0.25);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned and moved in the same tick
        let o = &state.obstacles[0];
        assert!(o.pos.x < WIDTH);
        assert_eq!(o.id, 1);
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_obstacles_stay_in_spawn_order() {
        let mut state = GameState::new(11);
        let input = TickInput { jump: true, ..Default::default() };
        for _ in 0..200 {
            tick(&mut state, &input, DT);
            let ids: Vec<u32> = state.obstacles.iter().map(|o| o.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn test_score_counts_each_obstacle_leaving_left_edge() {
        let mut state = GameState::new(5);
        for i in 0..10 {
            push_behind_player(&mut state, i as f32 * 10.0);
        }

        let input = TickInput::default();
        let mut cleared = 0;
        for _ in 0..30 {
            let events = tick(&mut state, &input, DT);
            cleared += events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleCleared { .. }))
                .count();
        }

        assert_eq!(state.score, 10);
        assert_eq!(cleared, 10);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.lives, STARTING_LIVES);

        // Multiplier catches up with the score on the next tick
        assert_eq!(state.spawner.multiplier, 1);
        tick(&mut state, &input, DT);
        assert_eq!(state.spawner.multiplier, 2);
    }

    #[test]
    fn test_collision_does_not_score() {
        let mut state = GameState::new(5);
        push_overlapping(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_one_life_per_tick_with_multiple_overlaps() {
        let mut state = GameState::new(5);
        let first = push_overlapping(&mut state);
        push_overlapping(&mut state);
        push_overlapping(&mut state);

        let events = tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.lives, 1);
        assert_eq!(
            events,
            vec![
                GameEvent::Collision { id: first, lives_left: 1 },
                GameEvent::LifeLost { lives_left: 1 },
            ]
        );
        // Soft-reset cleared the rest of the field
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::new());
    }

    #[test]
    fn test_last_life_is_terminal_without_reset() {
        let mut state = GameState::new(5);
        state.lives = 1;
        state.score = 4;
        state.spawner.multiplier = 3;
        let first = push_overlapping(&mut state);
        push_overlapping(&mut state);

        let events = tick(&mut state, &TickInput { right: true, ..Default::default() }, DT);

        assert_eq!(state.lives, 0);
        assert!(state.is_over());
        assert_eq!(
            events,
            vec![
                GameEvent::Collision { id: first, lives_left: 0 },
                GameEvent::OutOfLives { score: 4 },
            ]
        );
        // No soft-reset: the other obstacle, the moved player and the multiplier remain
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.player.pos.x > PLAYER_START_X);
        assert_eq!(state.spawner.multiplier, 3);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = GameState::new(5);
        state.lives = 0;
        let ticks = state.time_ticks;
        let events = tick(&mut state, &TickInput { jump: true, ..Default::default() }, DT);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, ticks);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_multiplier_resets_to_one_after_life_loss() {
        let mut state = GameState::new(5);
        state.score = 25;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.spawner.multiplier, 3);

        state.spawner.timer = 0.7;
        push_overlapping(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.spawner.multiplier, 1);
        assert_eq!(state.spawner.timer, 0.0);

        // Score is untouched, so the ratchet picks it back up next tick
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.spawner.multiplier, 3);
    }

    #[test]
    fn test_lives_never_increase() {
        let mut state = GameState::new(8);
        let input = TickInput::default();
        let mut last_lives = state.lives;
        for _ in 0..5000 {
            tick(&mut state, &input, DT);
            assert!(state.lives <= last_lives);
            last_lives = state.lives;
            if state.is_over() {
                break;
            }
        }
        // A player that never jumps runs out of lives
        assert!(state.is_over());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput { jump: true, ..Default::default() },
            TickInput { right: true, ..Default::default() },
            TickInput { left: true, jump: true, ..Default::default() },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[(i / 7) % inputs.len()];
            let e1 = tick(&mut state1, input, DT);
            let e2 = tick(&mut state2, input, DT);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.player, state2.player);
    }
}
