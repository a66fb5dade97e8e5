//! Seeded random fill

use super::Seeder;
use crate::core_types::{Cell, Grid};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Golden-ratio increment used to give every row its own RNG stream
const ROW_STREAM_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Every cell alive with probability 0.5, reproducible from `seed`
///
/// Each row draws from its own `StdRng` seeded from `(seed, row)`, so the fill
/// runs in parallel and still yields the same board for any thread count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomFill {
    seed: u64,
}

impl RandomFill {
    /// Create a random fill with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed this fill was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn row_rng(&self, y: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ (y as u64).wrapping_add(1).wrapping_mul(ROW_STREAM_STEP))
    }
}

impl Seeder for RandomFill {
    fn name(&self) -> &'static str {
        "random"
    }

    fn seed_grid(&self, grid: &mut Grid) {
        let width = grid.width();
        grid.as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let mut rng = self.row_rng(y);
                // One RNG word covers 64 cells
                for chunk in row.chunks_mut(64) {
                    let mut bits = rng.next_u64();
                    for cell in chunk {
                        *cell = Cell::from(bits & 1 == 1);
                        bits >>= 1;
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(seed: u64, height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(height, width).unwrap();
        RandomFill::new(seed).seed_grid(&mut grid);
        grid
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(filled(42, 31, 97), filled(42, 31, 97));
    }

    #[test]
    fn test_different_seed_different_board() {
        assert_ne!(filled(1, 64, 64), filled(2, 64, 64));
    }

    #[test]
    fn test_rows_are_not_copies() {
        let grid = filled(5489, 4, 128);
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_ne!(rows[0], rows[1]);
        assert_ne!(rows[1], rows[2]);
    }

    #[test]
    fn test_roughly_half_alive() {
        let grid = filled(5489, 200, 200);
        let fraction = grid.population() as f64 / grid.len() as f64;
        assert!((0.45..0.55).contains(&fraction), "alive fraction {fraction}");
    }
}
