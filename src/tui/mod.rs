//! Terminal front end: the board over a starfield.

mod app;
mod input;
mod stars;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use stars::Stars;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config, size.width, size.height);
    let frame = Duration::from_millis(*config.tui().frame_millis());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        if last_tick.elapsed() >= frame {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit() {
            info!("Leaving TUI");
            return Ok(());
        }
    }
}
