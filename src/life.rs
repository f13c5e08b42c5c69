//! The evolution rule: Moore-neighborhood counting and one generation step

use crate::grid::Grid;

/// The 8 neighbor offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live neighbors of `(x, y)`. Positions outside the grid are not
/// counted; the boundary is hard, not a torus.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx >= 0 && nx < grid.width() as isize && ny >= 0 && ny < grid.height() as isize {
            if grid.get(nx as usize, ny as usize) {
                count += 1;
            }
        }
    }
    count
}

/// Compute the next generation. The input grid is untouched; the result is
/// a fresh grid so neighbor counts never see partially-updated state.
///
/// Standard rule: a live cell with 2 or 3 live neighbors survives, a dead
/// cell with exactly 3 is born, everything else is dead.
pub fn evolve(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let count = live_neighbors(grid, x, y);
            let alive = if grid.get(x, y) {
                count == 2 || count == 3
            } else {
                count == 3
            };
            next.set(x, y, alive);
        }
    }
    next
}
