//! Row-parallel generation update
//!
//! Computes one full generation from `current` into `next`. Rows of `next`
//! are handed to Rayon as disjoint mutable chunks while `current` is shared
//! read-only, so the hot loop needs no locks. The parallel iterator returning
//! is the barrier between generations.

use super::neighbors::WrapTable;
use super::rules::next_state;
use crate::core_types::Cell;
use rayon::prelude::*;

/// Minimum cells per Rayon task; narrow boards get several rows per task
const MIN_CELLS_PER_TASK: usize = 4096;

/// CPU implementation of one Game of Life generation
///
/// # Arguments
///
/// * `current` - Source generation (row-major, read-only)
/// * `next` - Destination buffer, fully overwritten
/// * `table` - Wrapped neighbour offsets for the grid shape
///
/// Each output cell depends only on `current`, so the result does not depend
/// on how rows are split across threads.
pub fn step_generation_cpu(current: &[Cell], next: &mut [Cell], table: &WrapTable) {
    let width = table.width();
    debug_assert_eq!(current.len(), width * table.height());
    debug_assert_eq!(next.len(), current.len());

    let min_rows = (MIN_CELLS_PER_TASK / width).max(1);

    next.par_chunks_mut(width)
        .enumerate()
        .with_min_len(min_rows)
        .for_each(|(y, out_row)| {
            let (above_start, below_start) = table.row_offsets(y);
            let here_start = y * width;

            let above = &current[above_start..above_start + width];
            let here = &current[here_start..here_start + width];
            let below = &current[below_start..below_start + width];

            for (x, out) in out_row.iter_mut().enumerate() {
                let (l, r) = table.columns(x);
                let sum = above[l].value()
                    + above[x].value()
                    + above[r].value()
                    + here[l].value()
                    + here[r].value()
                    + below[l].value()
                    + below[x].value()
                    + below[r].value();

                *out = next_state(here[x], sum);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Grid;

    fn step(grid: &Grid) -> Grid {
        let table = WrapTable::new(grid.height(), grid.width());
        let mut next = Grid::new(grid.height(), grid.width()).unwrap();
        step_generation_cpu(grid.as_slice(), next.as_mut_slice(), &table);
        next
    }

    #[test]
    fn test_blinker_oscillates() {
        let grid = Grid::from_rows(&["00000", "00000", "01110", "00000", "00000"]).unwrap();
        let once = step(&grid);
        assert_eq!(
            once,
            Grid::from_rows(&["00000", "00100", "00100", "00100", "00000"]).unwrap()
        );
        assert_eq!(step(&once), grid);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = Grid::from_rows(&["0000", "0110", "0110", "0000"]).unwrap();
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_wraps_across_vertical_edge() {
        // Horizontal blinker straddling x = 0 on a 6-wide torus
        let grid = Grid::from_rows(&["000000", "000000", "110001", "000000", "000000"]).unwrap();
        let once = step(&grid);
        assert_eq!(
            once,
            Grid::from_rows(&["000000", "100000", "100000", "100000", "000000"]).unwrap()
        );
    }

    #[test]
    fn test_matches_modulo_reference() {
        // Non-square board with an irregular deterministic pattern
        let (height, width) = (7, 13);
        let mut grid = Grid::new(height, width).unwrap();
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, Cell::from((x * 7 + y * 3 + x * y) % 5 < 2));
            }
        }

        let next = step(&grid);
        for y in 0..height {
            for x in 0..width {
                let expected = next_state(grid.get(x, y), grid.live_neighbors(x, y));
                assert_eq!(next.get(x, y), expected, "mismatch at ({x}, {y})");
            }
        }
    }
}
