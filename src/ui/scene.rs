//! Scene rendering for Skyward: play area, status bar, and info panel.

use crate::constants::{BIRD_WIDTH, GAME_HEIGHT, GAME_WIDTH, PIPE_GAP, PIPE_WIDTH};
use crate::game::types::FlappyGame;
use crate::ui::common::{render_game_over_overlay, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full game scene.
pub fn render_scene(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    // Game over overlay takes priority
    if game.game_over {
        render_game_over(frame, area, game);
        return;
    }

    frame.render_widget(Clear, area);

    // Outer border
    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Left side: play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], game);
    render_status_bar_content(frame, v_chunks[1], game);
    render_info_panel(frame, h_chunks[1], game);
}

/// Render the main play area with bird, pipes, and ground.
///
/// Game coordinates are scaled onto whatever rectangle the terminal
/// gives us, so resizing never panics.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / GAME_WIDTH as f64;
    let y_scale = height as f64 / GAME_HEIGHT as f64;

    let bird_row = game.bird_y.round() as usize;
    let bird_display_row = (bird_row as f64 * y_scale).round() as usize;
    let bird_display_left = (game.bird_x as f64 * x_scale).round() as usize;
    let bird_display_right =
        ((game.bird_x + BIRD_WIDTH - 1) as f64 * x_scale).round() as usize;

    let ground_row = (GAME_HEIGHT - 1) as usize;

    let mut lines = Vec::with_capacity(height);

    for display_row in 0..height {
        let mut spans = Vec::new();
        let game_row = (display_row as f64 / y_scale).round() as usize;

        for display_col in 0..width {
            let game_col = (display_col as f64 / x_scale).round() as i32;

            // Bird (drawn over everything else)
            if display_row == bird_display_row
                && display_col >= bird_display_left
                && display_col <= bird_display_right
            {
                let bird_char = if game.bird_vel < -0.5 {
                    "▲" // Flapping up
                } else if game.bird_vel > 1.0 {
                    "▼" // Falling fast
                } else {
                    "►" // Neutral
                };
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            // Pipes
            let mut is_pipe = false;
            let mut is_gap_edge = false;
            for pipe in &game.pipes {
                if game_col >= pipe.x && game_col < pipe.x + PIPE_WIDTH as i32 {
                    let gap_top = pipe.gap_top as usize;
                    let gap_bottom = gap_top + PIPE_GAP as usize;

                    if game_row < gap_top || game_row >= gap_bottom {
                        is_pipe = true;
                    } else if game_row == gap_top || game_row == gap_bottom - 1 {
                        is_gap_edge = true;
                    }
                    break;
                }
            }

            if is_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if is_gap_edge {
                spans.push(Span::styled("░", Style::default().fg(Color::DarkGray)));
            } else if game_row >= ground_row {
                spans.push(Span::styled("─", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::styled(" ", Style::default()));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if !game.started {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Flap"), ("[Q/Esc]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Q/Esc]", "Quit")],
        );
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            " Skyward ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.best_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.pipes.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Thread the gaps.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Render the game-over overlay.
fn render_game_over(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let message = if game.score == game.best_score && game.score > 0 {
        format!("You passed {} pipes - a new session best!", game.score)
    } else {
        format!(
            "You passed {} pipes before crashing. (Best: {})",
            game.score, game.best_score
        )
    };

    render_game_over_overlay(
        frame,
        area,
        Color::Red,
        "CRASH!",
        &message,
        "[Space] Restart  [Q/Esc] Quit",
    );
}
