//! Simulation configuration
//!
//! Everything that used to be hidden defaults (board size, RNG seed, worker
//! count) is carried here and passed into the engine explicitly.

use crate::error::LifeError;
use serde::{Deserialize, Serialize};

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 20_000;

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 20_000;

/// Default seed for the random fill (the Mersenne Twister default seed)
pub const DEFAULT_SEED: u64 = 5489;

/// Parameters for constructing a [`LifeSimulation`](crate::LifeSimulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid height in cells (must be positive)
    pub height: usize,
    /// Grid width in cells (must be positive)
    pub width: usize,
    /// Seed for random initialisation
    pub seed: u64,
    /// Worker threads; 0 uses the available hardware parallelism
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            seed: DEFAULT_SEED,
            threads: 0,
        }
    }
}

impl SimulationConfig {
    /// Configuration for a `height × width` board with default seed and threads
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the worker thread count (0 = automatic)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Number of cells in one buffer, `None` if `height * width` overflows
    pub fn cell_count(&self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Worker count after resolving 0 to the machine's parallelism
    pub fn resolved_threads(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    }

    /// Check the configuration before any buffer is allocated
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimensions`] if height or width is zero or
    /// the buffer would not fit in memory.
    pub fn validate(&self) -> Result<(), LifeError> {
        checked_cell_count(self.height, self.width).map(|_| ())
    }
}

/// Cell count of a `height × width` buffer
///
/// Both sides must be positive and the product must fit in a single
/// allocation (at most `isize::MAX` one-byte cells).
///
/// # Errors
///
/// Returns [`LifeError::InvalidDimensions`] otherwise.
pub fn checked_cell_count(height: usize, width: usize) -> Result<usize, LifeError> {
    height
        .checked_mul(width)
        .filter(|&cells| cells > 0 && cells <= isize::MAX.unsigned_abs())
        .ok_or(LifeError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.height, 20_000);
        assert_eq!(config.width, 20_000);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = SimulationConfig::new(30, 40).with_seed(7).with_threads(3);
        assert_eq!(config.height, 30);
        assert_eq!(config.width, 40);
        assert_eq!(config.seed, 7);
        assert_eq!(config.resolved_threads(), 3);
        assert_eq!(config.cell_count(), Some(1200));
    }

    #[test]
    fn test_auto_threads_is_positive() {
        assert!(SimulationConfig::new(1, 1).resolved_threads() >= 1);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            SimulationConfig::new(0, 10).validate(),
            Err(LifeError::InvalidDimensions {
                width: 10,
                height: 0
            })
        ));
        assert!(SimulationConfig::new(10, 0).validate().is_err());
        assert!(SimulationConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_rejects_overflowing_dimensions() {
        let config = SimulationConfig::new(1 << 32, 1 << 32);
        assert_eq!(config.cell_count(), None);
        assert!(matches!(
            config.validate(),
            Err(LifeError::InvalidDimensions { .. })
        ));

        // Fits in usize but not in one allocation
        let config = SimulationConfig::new(usize::MAX / 2, 2);
        assert!(config.cell_count().is_some());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checked_cell_count() {
        assert_eq!(checked_cell_count(3, 4).unwrap(), 12);
        assert!(checked_cell_count(0, 4).is_err());
        assert!(checked_cell_count(usize::MAX, 2).is_err());
    }
}
