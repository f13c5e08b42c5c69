// Integration tests for the TUI layer, using ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lifetui::grid::Grid;
use lifetui::ui::{board, App};
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_render_transposes_grid_to_screen_coordinates() {
    // Grid (x, y) = (column, row) must land on screen row y, column x
    let mut grid = Grid::new(4, 3);
    grid.set(1, 0, true);
    grid.set(3, 2, true);

    let backend = TestBackend::new(4, 3);
    let mut terminal = Terminal::new(backend).expect("Terminal creation failed");
    terminal
        .draw(|f| board::render_board(f, f.area(), &grid))
        .expect("Draw failed");

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer.get(1, 0).symbol(), "O");
    assert_eq!(buffer.get(3, 2).symbol(), "O");
    assert_eq!(buffer.get(0, 0).symbol(), " ");
    assert_eq!(buffer.get(2, 1).symbol(), " ");
    // The un-transposed position of live cell (1, 0) stays empty
    assert_eq!(buffer.get(0, 1).symbol(), " ");
}

#[test]
fn test_quit_key_stops_the_app() {
    let mut app = App::new(Grid::new(3, 3));
    assert!(!app.should_quit);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(app.should_quit, "'q' must request shutdown");
}

#[test]
fn test_other_keys_keep_the_app_running() {
    let mut app = App::new(Grid::new(3, 3));

    app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    app.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    assert!(!app.should_quit, "only 'q' may stop the loop");
}

#[test]
fn test_step_advances_one_generation() {
    // A blinker: after one step the horizontal line is vertical, so the
    // frame drawn first is the evolved state, never the seed itself
    let mut grid = Grid::new(5, 5);
    grid.set(1, 2, true);
    grid.set(2, 2, true);
    grid.set(3, 2, true);

    let mut app = App::new(grid);
    app.step();

    assert!(app.grid.get(2, 1));
    assert!(app.grid.get(2, 2));
    assert!(app.grid.get(2, 3));
    assert_eq!(app.grid.alive_count(), 3);
}
