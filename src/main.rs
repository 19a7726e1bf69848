mod app;
mod board;
mod overlays;
mod panels;
mod snapshot;
mod storage;
mod task;
mod ui;
mod util;

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use app::App;
use storage::Storage;

fn main() -> anyhow::Result<()> {
    // env_logger writes to stderr; redirect it when watching a session
    env_logger::init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .get(1)
        .map_or_else(|| PathBuf::from("kanban.json"), PathBuf::from);

    // Open the board before touching the terminal, so a bad file prints
    // a plain error instead of garbling the alternate screen.
    let (storage, loaded) = Storage::open(path)?;
    let board = snapshot::decode(&loaded);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("kanban-tui")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run(&mut terminal, App::new(board, storage));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        // Nothing animates, so block until the next event instead of
        // polling on a tick.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
