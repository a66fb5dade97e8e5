//! Precomputed toroidal neighbour offsets
//!
//! Wrapping `x - 1` and `x + 1` with `%` eight times per cell dominates the
//! inner loop on large boards. The table stores the wrapped column indices
//! and wrapped row start offsets once, so the kernel only does lookups.

/// Wrapped neighbour indices for a `height × width` torus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapTable {
    /// `(x - 1) mod width` for every column
    left: Vec<usize>,
    /// `(x + 1) mod width` for every column
    right: Vec<usize>,
    /// Start index of row `(y - 1) mod height` for every row
    above: Vec<usize>,
    /// Start index of row `(y + 1) mod height` for every row
    below: Vec<usize>,
    width: usize,
    height: usize,
}

impl WrapTable {
    /// Build the table for a grid with positive dimensions
    pub fn new(height: usize, width: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "wrap table needs a non-empty grid");

        let left = (0..width).map(|x| (x + width - 1) % width).collect();
        let right = (0..width).map(|x| (x + 1) % width).collect();
        let above = (0..height)
            .map(|y| ((y + height - 1) % height) * width)
            .collect();
        let below = (0..height).map(|y| ((y + 1) % height) * width).collect();

        Self {
            left,
            right,
            above,
            below,
            width,
            height,
        }
    }

    /// Grid width the table was built for
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height the table was built for
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Wrapped `(left, right)` column indices of column `x`
    #[inline(always)]
    pub fn columns(&self, x: usize) -> (usize, usize) {
        (self.left[x], self.right[x])
    }

    /// Start offsets of the rows `(above, below)` row `y`
    #[inline(always)]
    pub fn row_offsets(&self, y: usize) -> (usize, usize) {
        (self.above[y], self.below[y])
    }
}
