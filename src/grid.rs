//! Dense boolean grid with random seeding

use rand::Rng;

/// A `width` × `height` field of cells, addressed by zero-based
/// `(x, y)` = (column, row). Every cell always holds a defined flag;
/// there are no sparse entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at column `x`, row `y` is alive.
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = alive;
    }

    /// Number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Mark exactly `target` distinct cells alive, chosen uniformly at
    /// random. Cells that come up already alive are resampled, so the
    /// caller must keep `target` strictly below `width * height` (the
    /// 10%-of-grid policy used at startup always does).
    pub fn seed_random<R: Rng>(&mut self, target: usize, rng: &mut R) {
        debug_assert!(target < self.width * self.height);
        for _ in 0..target {
            let (mut x, mut y) = (rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            while self.get(x, y) {
                (x, y) = (rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            }
            self.set(x, y, true);
        }
    }
}
