//! Game logic for Skyward: input handling, per-tick physics, pipe
//! scrolling, collision detection, and scoring.

use super::types::FlappyGame;
use crate::constants::{
    BIRD_WIDTH, FLAP_VELOCITY, GAME_HEIGHT, GRAVITY, PIPE_GAP, PIPE_SPACING, PIPE_SPEED_TICKS,
    PIPE_WIDTH,
};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Up or Enter). Doubles as the restart key on the
    /// game-over screen.
    Flap,
    /// Any other key.
    Other,
}

/// Process player input.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    match input {
        FlappyInput::Flap => {
            if game.game_over {
                // The designated key restarts after a crash. The press that
                // restarts does not also flap; the new run begins at rest.
                reset(game);
                return;
            }
            if !game.started {
                game.started = true;
            }
            // Velocity override, not additive
            game.bird_vel = FLAP_VELOCITY;
        }
        FlappyInput::Other => {}
    }
}

/// Process one physics tick (called every 100ms from the game loop).
/// Handles gravity, pipe scrolling, scoring, spawning, and collisions.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if game.game_over || !game.started {
        return;
    }

    // Apply gravity: a fixed increment per tick, no terminal velocity
    game.bird_vel += GRAVITY;
    game.bird_y += game.bird_vel;

    // The ceiling clamps position and kills momentum; it never ends the run
    if game.bird_y < 0.0 {
        game.bird_y = 0.0;
        game.bird_vel = 0.0;
    }

    // Ground contact ends the run
    if game.bird_y >= (GAME_HEIGHT - 1) as f64 {
        game.bird_y = (GAME_HEIGHT - 1) as f64;
        end_run(game);
        return;
    }

    // Pipes only move on scroll-cadence ticks
    game.tick_count += 1;
    if game.tick_count % PIPE_SPEED_TICKS != 0 {
        return;
    }

    // Scroll pipes left
    for pipe in &mut game.pipes {
        pipe.x -= 1;
    }

    // Remove pipes whose trailing edge has passed the left boundary
    game.pipes.retain(|p| p.x + PIPE_WIDTH as i32 > 0);

    // Score pipes whose trailing edge has passed the bird's leading edge
    let bird_left = game.bird_x as i32;
    for pipe in &mut game.pipes {
        if !pipe.scored && pipe.x + PIPE_WIDTH as i32 <= bird_left {
            pipe.scored = true;
            game.score += 1;
        }
    }

    // Spawn the next pipe once the spacing countdown runs out
    game.next_pipe_in = game.next_pipe_in.saturating_sub(1);
    if game.next_pipe_in == 0 {
        game.spawn_pipe(rng);
        game.next_pipe_in = PIPE_SPACING;
    }

    check_collisions(game);
}

/// Axis-aligned overlap test of the bird's cells against each pipe's
/// solid cells. Any hit ends the run.
fn check_collisions(game: &mut FlappyGame) {
    let bird_row = game.bird_y.round() as i32;
    let bird_left = game.bird_x as i32;
    let bird_right = bird_left + BIRD_WIDTH as i32 - 1;

    for pipe in &game.pipes {
        let pipe_left = pipe.x;
        let pipe_right = pipe.x + PIPE_WIDTH as i32 - 1;

        if bird_right < pipe_left || bird_left > pipe_right {
            continue;
        }

        // Horizontal overlap: the bird survives only inside the gap
        let gap_top = pipe.gap_top as i32;
        let gap_bottom = gap_top + PIPE_GAP as i32 - 1;
        if bird_row < gap_top || bird_row > gap_bottom {
            end_run(game);
            return;
        }
    }
}

/// Start a fresh run in place. Everything resets in bulk except
/// `best_score`, which carries across runs for this process.
pub fn reset(game: &mut FlappyGame) {
    let best = game.best_score.max(game.score);
    *game = FlappyGame::new();
    game.best_score = best;
    // A reset run resumes play immediately; no second "press to start"
    game.started = true;
}

fn end_run(game: &mut FlappyGame) {
    game.game_over = true;
    game.best_score = game.best_score.max(game.score);
}
