//! Dense cell buffer for the toroidal grid
//!
//! The grid stores every cell of a `width × height` torus as a flat `Vec<Cell>`
//! in row-major order. Nothing here is sparse: the whole board is always
//! materialised, and the engine keeps two of these as ping-pong buffers.

use super::cell::Cell;
use crate::config::checked_cell_count;
use crate::error::LifeError;
use rayon::prelude::*;

/// Grid of cells in row-major order
///
/// Cell `(x, y)` lives at index `y * width + x`. Coordinates wrap on both axes
/// when neighbours are counted, but `get`/`set` take in-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a new grid with every cell dead
    ///
    /// # Arguments
    ///
    /// * `height` - Grid height in cells
    /// * `width` - Grid width in cells
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimensions`] if either side is zero or
    /// `height * width` cells cannot be allocated.
    pub fn new(height: usize, width: usize) -> Result<Self, LifeError> {
        let len = checked_cell_count(height, width)?;
        Ok(Self {
            cells: vec![Cell::Dead; len],
            width,
            height,
        })
    }

    /// Build a grid from rows of `0`/`1` digits
    ///
    /// All rows must share a length.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimensions`] for an empty pattern and
    /// [`LifeError::InvalidPattern`] for ragged rows or bytes other than
    /// `0` and `1`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LifeError> {
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = Self::new(rows.len(), width)?;

        for (y, (dst, src)) in grid.cells.chunks_exact_mut(width).zip(rows).enumerate() {
            if src.len() != width {
                return Err(LifeError::InvalidPattern(format!(
                    "row {y} has {} cells, expected {width}",
                    src.len()
                )));
            }
            for (x, (cell, byte)) in dst.iter_mut().zip(src.bytes()).enumerate() {
                *cell = match byte {
                    b'0' => Cell::Dead,
                    b'1' => Cell::Alive,
                    other => {
                        return Err(LifeError::InvalidPattern(format!(
                            "unexpected {:?} at row {y}, column {x}",
                            char::from(other)
                        )))
                    }
                };
            }
        }
        Ok(grid)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get reference to the cell data
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Get mutable reference to the cell data
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    /// Get the cell at a grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.cells[y * self.width + x]
    }

    /// Set the cell at a grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.cells[y * self.width + x] = cell;
    }

    /// Fill entire grid with one state
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.par_iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbours of `(x, y)` with toroidal wraparound
    ///
    /// This is the straightforward modulo form. The engine uses precomputed
    /// [`WrapTable`](crate::solver::WrapTable) offsets instead; both must agree.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width, self.height);
        let left = (x + w - 1) % w;
        let right = (x + 1) % w;
        let up = (y + h - 1) % h;
        let down = (y + 1) % h;

        [
            (left, up),
            (x, up),
            (right, up),
            (left, y),
            (right, y),
            (left, down),
            (x, down),
            (right, down),
        ]
        .iter()
        .map(|&(nx, ny)| self.cells[ny * w + nx].value())
        .sum()
    }
}
