// lifetui: Conway's Game of Life, one generation per key press

mod grid;
mod life;
mod ui;

use std::io;

use crossterm::{
    cursor,
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use grid::Grid;
use ui::App;

/// Owns the terminal modes for the process lifetime. Dropping it restores
/// the terminal on every exit path, panics included; the happy path calls
/// [`TerminalGuard::release`] instead so restore failures surface.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalGuard { restored: false })
    }

    fn release(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Leave a one-cell margin in each dimension so drawing at the far edge
    // cannot wrap.
    let (cols, rows) = size()?;
    let width = cols.saturating_sub(1) as usize;
    let height = rows.saturating_sub(1) as usize;

    if width == 0 || height == 0 {
        eprintln!(
            "Error: terminal too small ({}x{}); need at least 2 columns and 2 rows",
            cols, rows
        );
        std::process::exit(1);
    }

    // Seed 10% of the cells before entering the loop; the first frame shown
    // is already the seed's first generation.
    let mut grid = Grid::new(width, height);
    grid.seed_random(width * height / 10, &mut rand::thread_rng());

    // Set up terminal
    let guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(grid);
    app.run(&mut terminal)?;

    // Restore terminal
    guard.release()?;

    Ok(())
}
