//! Single glider pattern

use super::Seeder;
use crate::core_types::{Cell, Grid};

/// Live cells of the glider relative to its origin, as `(dx, dy)`
///
/// ```text
/// . . #
/// # . #
/// . # #
/// ```
///
/// Travels one cell right and one cell down every four generations.
pub const GLIDER_CELLS: [(usize, usize); 5] = [(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)];

/// Clears the board and places one glider with its origin at `(x, y)`
///
/// Cells past the edge wrap around, matching the torus the engine runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glider {
    /// Origin column
    pub x: usize,
    /// Origin row
    pub y: usize,
}

impl Glider {
    /// Glider with its origin at `(x, y)`
    pub fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Seeder for Glider {
    fn name(&self) -> &'static str {
        "glider"
    }

    fn seed_grid(&self, grid: &mut Grid) {
        grid.fill(Cell::Dead);
        let (width, height) = (grid.width(), grid.height());
        for (dx, dy) in GLIDER_CELLS {
            grid.set((self.x + dx) % width, (self.y + dy) % height, Cell::Alive);
        }
    }
}
