//! Interactive terminal front end
//!
//! Renders the coordinator's state with ratatui and feeds crossterm key
//! events back into it.

mod app;
mod view;

pub use app::App;
pub use view::render;

use crate::autocomplete::Autocomplete;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Raw mode and alternate screen, undone on drop whatever the exit path
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

/// Take over the terminal and run the widget until the user quits
pub async fn run(autocomplete: Autocomplete, placeholder: &str) -> Result<()> {
    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(autocomplete, placeholder);

    run_loop(&mut terminal, &mut app).await
}

async fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.autocomplete.drain_events();

        let snapshot = app.autocomplete.snapshot();
        terminal.draw(|f| render(f, &snapshot, &app.placeholder, app.status.as_deref()))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(url) = app.handle_key(key) {
                        app.open(&url);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}
