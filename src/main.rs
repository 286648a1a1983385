//! Detective Quest
//!
//! Explore the manor, collect the clues, accuse the culprit.

use detective_quest::config::{Frontend, Settings};
use detective_quest::console::Console;
use detective_quest::tui::App;
use detective_quest::Game;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(settings: &Settings) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_plain() -> detective_quest::Result<()> {
    let mut game = Game::new();
    println!("Welcome to Detective Quest!");
    println!("{}", game.synopsis);
    println!("Move with (e) left and (d) right, (s) to leave the mansion.");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), stdout());
    game.play(&mut console)?;

    game.teardown();
    println!("\nYou leave the manor. The case file is closed.");
    Ok(())
}

fn run_tui() -> detective_quest::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Main loop
    let result = (|| -> detective_quest::Result<()> {
        while app.running {
            terminal.draw(|frame| {
                app.render(frame);
            })?;

            if !app.handle_input()? {
                break;
            }
        }
        Ok(())
    })();

    // Cleanup, even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    let report = app.game.teardown();
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!                   ║");
    println!("║  Rooms released: {:<38}║", report.rooms);
    println!("╚════════════════════════════════════════════════════════╝\n");
    Ok(())
}

fn main() -> detective_quest::Result<()> {
    let settings = Settings::from_env();

    init_logging(&settings);
    tracing::info!(frontend = ?settings.frontend, "starting Detective Quest");

    match settings.frontend {
        Frontend::Plain => run_plain(),
        Frontend::Tui => run_tui(),
    }
}
