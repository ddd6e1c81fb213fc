mod app;
mod codec;
mod config;
mod delete;
mod picker;
mod repo;
mod ui;
mod worktree;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use app::App;

/// Fuzzy picker for git worktrees: switch, delete, create.
///
/// Prints the chosen worktree path on exit, so a shell wrapper like
/// `cd "$(eda)"` lands in it.
#[derive(Parser)]
#[command(name = "eda", version)]
struct Args {
    /// Directory to resolve the repository from (defaults to the current
    /// directory).
    path: Option<PathBuf>,
    /// Config file (defaults to .eda.json in the repository root).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = run_app(&mut terminal, args);
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;

    // Printed only after the terminal is restored, so it is the sole
    // stdout output the wrapper sees.
    if let Some(path) = result? {
        println!("{path}");
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    args: Args,
) -> Result<Option<String>> {
    let start_dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let mut app = App::new(start_dir, args.config)?;

    loop {
        if let Some(path) = app.pending_switch.take() {
            return Ok(Some(path));
        }

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press && app.handle_key(key_event) {
                    return Ok(None);
                }
            }
        }
    }
}
