//! Terminal UI for Skyward.
//!
//! The scene owns the whole frame; `common` holds the status-bar and
//! overlay widgets shared between game states.

pub mod common;
pub mod scene;

use crate::game::types::FlappyGame;
use ratatui::Frame;

/// Main UI drawing function. Clears and redraws the full frame.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    let area = frame.size();
    scene::render_scene(frame, area, game);
}
