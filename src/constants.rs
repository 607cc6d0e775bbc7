// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;

// Play area dimensions (game coordinates; the renderer scales to fit)
pub const GAME_WIDTH: u16 = 60;
pub const GAME_HEIGHT: u16 = 20;

// Bird: fixed column, 2 cells wide, 1 row tall
pub const BIRD_COL: u16 = 8;
pub const BIRD_WIDTH: u16 = 2;

// Physics, in rows per tick. Flap overrides velocity rather than adding
// to it; gravity accumulates without a terminal cap.
pub const GRAVITY: f64 = 0.35;
pub const FLAP_VELOCITY: f64 = -1.1;

// Pipe constants
pub const PIPE_WIDTH: u16 = 2;
pub const PIPE_GAP: u16 = 6;
// Pipes advance one column every N physics ticks
pub const PIPE_SPEED_TICKS: u64 = 2;
// Columns between consecutive pipes; pipes move one column per scroll
// step, so this is also the spawn countdown in scroll steps
pub const PIPE_SPACING: u32 = 16;
// The gap keeps this many rows clear of the ceiling and the ground
pub const GAP_MARGIN: u16 = 2;
// Scroll steps before the first pipe appears
pub const FIRST_PIPE_DELAY: u32 = 8;
