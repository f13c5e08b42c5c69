//! Application state and the key-driven generation loop

use crate::grid::Grid;
use crate::life;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

/// The key that ends the simulation. Every other key advances it.
pub const QUIT_KEY: char = 'q';

/// The main application state
pub struct App {
    /// The current generation
    pub grid: Grid,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a (freshly seeded) grid
    pub fn new(grid: Grid) -> Self {
        App {
            grid,
            should_quit: false,
        }
    }

    /// Run the simulation loop: advance a generation, redraw, then block
    /// for a key press. The blocking read is the only pacing mechanism.
    /// The loop evolves before drawing, so the raw seed is never shown.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            self.step();
            terminal.draw(|f| self.render(f))?;
            let key = wait_for_key_press()?;
            self.handle_key_event(key);
        }
        Ok(())
    }

    /// Advance the grid by one generation
    pub fn step(&mut self) {
        self.grid = life::evolve(&self.grid);
    }

    /// Render the current grid
    fn render(&self, frame: &mut Frame) {
        super::board::render_board(frame, frame.area(), &self.grid);
    }

    /// Handle a key press: the quit key stops the loop, any other key
    /// lets it run another generation
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char(QUIT_KEY) {
            self.should_quit = true;
        }
    }
}

/// Block until a key press arrives, discarding everything else (releases,
/// repeats, resize events).
fn wait_for_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
