//! Skyward game state: the bird, the pipes, and per-session scoring.

use crate::constants::{
    BIRD_COL, FIRST_PIPE_DELAY, GAME_HEIGHT, GAME_WIDTH, GAP_MARGIN, PIPE_GAP,
};
use rand::Rng;

/// A single pipe obstacle (top + bottom pair with a vertical gap).
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Column of the pipe's left edge. Signed so pipes can scroll
    /// partially past the left boundary before removal.
    pub x: i32,
    /// First open row of the gap. The gap spans `gap_top..gap_top + PIPE_GAP`.
    pub gap_top: u16,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

/// Main game state for one process lifetime. A run ends on collision or
/// ground contact; `reset` starts a fresh run in place.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    /// Vertical position in rows (float for smooth physics). Row 0 is the
    /// ceiling, row `GAME_HEIGHT - 1` is the ground.
    pub bird_y: f64,
    /// Current vertical velocity in rows/tick (positive = downward).
    pub bird_vel: f64,
    /// Fixed horizontal column of the bird's left edge.
    pub bird_x: u16,

    /// Active pipes, ordered by spawn time.
    pub pipes: Vec<Pipe>,
    /// Scroll steps until the next pipe spawns.
    pub next_pipe_in: u32,
    /// Physics ticks elapsed; drives the pipe scroll cadence.
    pub tick_count: u64,

    /// Pipes passed this run.
    pub score: u32,
    /// Best score across runs in this process. Never written to disk.
    pub best_score: u32,

    /// Terminal state, cleared only by an explicit reset.
    pub game_over: bool,
    /// True once the player has flapped; physics is paused until then.
    pub started: bool,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self {
            // Bird starts roughly in the middle of the play area
            bird_y: (GAME_HEIGHT / 2) as f64,
            bird_vel: 0.0,
            bird_x: BIRD_COL,

            pipes: Vec::new(),
            next_pipe_in: FIRST_PIPE_DELAY,
            tick_count: 0,

            score: 0,
            best_score: 0,

            game_over: false,
            started: false,
        }
    }

    /// Spawn a pipe at the right edge with a random gap position. The gap
    /// is constrained so it never clips the ceiling or ground margin.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let max_gap_top = GAME_HEIGHT - PIPE_GAP - GAP_MARGIN;
        let gap_top = rng.gen_range(GAP_MARGIN..=max_gap_top);

        self.pipes.push(Pipe {
            x: GAME_WIDTH as i32,
            gap_top,
            scored: false,
        });
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}
