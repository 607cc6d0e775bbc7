mod build_info;
mod constants;
mod game;
mod ui;

use constants::TICK_INTERVAL_MS;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{process_input, process_tick, FlappyInput};
use game::types::FlappyGame;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy-Bird Arcade Game\n");
                println!("Usage: skyward [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls:");
                println!("  Space/Up/Enter  Flap (restarts after a crash)");
                println!("  Q/Esc           Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = FlappyGame::new();
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        break;
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        process_input(&mut game, FlappyInput::Flap);
                    }
                    _ => {
                        process_input(&mut game, FlappyInput::Other);
                    }
                }
            }
        }

        // Physics tick every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            process_tick(&mut game, &mut rng);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
