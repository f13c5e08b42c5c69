//! Board rendering: live cells drawn as markers at their screen positions

use crate::grid::Grid;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Character drawn for a live cell.
pub const ALIVE_MARKER: char = 'O';

/// Render the grid into `area`.
///
/// The grid is addressed (column, row) while the screen is row-first, so
/// grid cell `(x, y)` lands on text line `y` at character `x`.
pub fn render_board(frame: &mut Frame, area: Rect, grid: &Grid) {
    let lines: Vec<Line> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| if grid.get(x, y) { ALIVE_MARKER } else { ' ' })
                .collect::<String>()
                .into()
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
