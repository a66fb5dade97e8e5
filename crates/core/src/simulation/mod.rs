//! Game of Life simulation engine
//!
//! [`LifeSimulation`] owns two equally sized grids and advances them one
//! generation at a time:
//!
//! 1. Every row of `next` is computed from `current` on the engine's Rayon pool
//! 2. The pool finishing the row iterator is the generation barrier
//! 3. `current` and `next` swap roles (pointer swap, no copy)
//!
//! Generations are strictly sequential; only the cells within one generation
//! are processed in parallel. No allocation happens after construction.

use crate::config::SimulationConfig;
use crate::core_types::{Cell, Grid};
use crate::error::LifeError;
use crate::init::{RandomFill, Seeder};
use crate::solver::{step_generation_cpu, FrameTimer, ProfilerScope, WrapTable};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Summary of one call to [`LifeSimulation::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Generations computed by this call
    pub turns: u64,
    /// Wall-clock time spent computing them
    pub elapsed: Duration,
}

/// Double-buffered toroidal Game of Life
pub struct LifeSimulation {
    /// Authoritative state between steps (read-only during a step)
    current: Grid,
    /// Write target during a step; stale otherwise
    next: Grid,

    /// Wrapped neighbour offsets for the grid shape
    wrap: WrapTable,

    /// Worker pool owned by this engine
    pool: rayon::ThreadPool,

    /// Total generations computed since construction
    generation: u64,

    /// Per-generation timing
    timer: FrameTimer,

    config: SimulationConfig,
}

impl LifeSimulation {
    /// Create a new simulation and seed its starting grid
    ///
    /// # Arguments
    ///
    /// * `config` - Board dimensions, seed and worker count
    /// * `seeder` - Initial pattern strategy, applied once to the current grid
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimensions`] if height or width is zero or
    /// their product overflows, or [`LifeError::ThreadPool`] if the worker pool cannot be created.
    pub fn new(config: SimulationConfig, seeder: &dyn Seeder) -> Result<Self, LifeError> {
        config.validate()?;

        let threads = config.resolved_threads();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("life-worker-{i}"))
            .build()
            .map_err(|e| LifeError::ThreadPool(e.to_string()))?;

        let mut current = Grid::new(config.height, config.width)?;
        let next = Grid::new(config.height, config.width)?;
        let wrap = WrapTable::new(config.height, config.width);

        {
            let _scope = ProfilerScope::new("seed");
            pool.install(|| seeder.seed_grid(&mut current));
        }

        info!(
            "Life simulation initialized: {}x{} grid (HxW), {} threads, seeder={}",
            config.height,
            config.width,
            threads,
            seeder.name()
        );

        Ok(Self {
            current,
            next,
            wrap,
            pool,
            generation: 0,
            timer: FrameTimer::new(),
            config,
        })
    }

    /// Create a simulation seeded with [`RandomFill`] using `config.seed`
    ///
    /// # Errors
    ///
    /// Same as [`LifeSimulation::new`].
    pub fn with_random_fill(config: SimulationConfig) -> Result<Self, LifeError> {
        Self::new(config, &RandomFill::new(config.seed))
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let started = Instant::now();

        let current = self.current.as_slice();
        let next = self.next.as_mut_slice();
        let wrap = &self.wrap;
        self.pool.install(|| step_generation_cpu(current, next, wrap));

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.timer.record(started.elapsed());

        debug!(
            generation = self.generation,
            elapsed_us = self.timer.last().as_micros(),
            "generation complete"
        );
    }

    /// Run `turns` generations back to back
    ///
    /// `run(0)` leaves the grid untouched.
    pub fn run(&mut self, turns: u64) -> RunStats {
        let scope = ProfilerScope::new("run");
        for _ in 0..turns {
            self.step();
        }
        self.finish_run(turns, scope.elapsed())
    }

    /// Run `turns` generations, handing each new generation to `observer`
    ///
    /// The observer receives the generation number (starting at the engine's
    /// generation count before the call) and the grid after that step.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error produced by `observer`.
    pub fn run_with_observer<F>(
        &mut self,
        turns: u64,
        mut observer: F,
    ) -> Result<RunStats, LifeError>
    where
        F: FnMut(u64, &Grid) -> Result<(), LifeError>,
    {
        let scope = ProfilerScope::new("run");
        for _ in 0..turns {
            let generation = self.generation;
            self.step();
            observer(generation, &self.current)?;
        }
        Ok(self.finish_run(turns, scope.elapsed()))
    }

    fn finish_run(&self, turns: u64, elapsed: Duration) -> RunStats {
        info!(
            "Ran {} generations in {} us (mean {} us/generation, generation {} total)",
            turns,
            elapsed.as_micros(),
            self.timer.mean().as_micros(),
            self.generation
        );
        RunStats { turns, elapsed }
    }

    /// Current generation grid
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Current generation as a flat row-major slice
    pub fn cells(&self) -> &[Cell] {
        self.current.as_slice()
    }

    /// Consume the engine and keep the latest generation
    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// Generations computed since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid dimensions as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.config.height, self.config.width)
    }

    /// Worker threads in the engine's pool
    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Per-generation timing collected so far
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{Empty, Glider};

    fn config(height: usize, width: usize) -> SimulationConfig {
        SimulationConfig::new(height, width).with_threads(2)
    }

    #[test]
    fn test_simulation_creation() {
        let sim = LifeSimulation::with_random_fill(config(12, 20)).unwrap();
        assert_eq!(sim.dimensions(), (12, 20));
        assert_eq!(sim.grid().width(), 20);
        assert_eq!(sim.grid().height(), 12);
        assert_eq!(sim.cells().len(), 240);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.thread_count(), 2);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            LifeSimulation::with_random_fill(config(0, 10)),
            Err(LifeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            LifeSimulation::new(config(10, 0), &Empty),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_run_counts_generations() {
        let mut sim = LifeSimulation::with_random_fill(config(16, 16)).unwrap();
        let stats = sim.run(5);
        assert_eq!(stats.turns, 5);
        assert_eq!(sim.generation(), 5);
        assert_eq!(sim.timer().frames(), 5);

        sim.run(3);
        assert_eq!(sim.generation(), 8);
    }

    #[test]
    fn test_run_zero_keeps_initial_state() {
        let mut sim = LifeSimulation::with_random_fill(config(24, 17)).unwrap();
        let before = sim.grid().clone();
        sim.run(0);
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_step_swaps_buffers() {
        // Blinker period 2: after one step the state differs, after two it returns
        let mut sim = LifeSimulation::new(config(5, 5), &Empty).unwrap();
        let start = Grid::from_rows(&["00000", "00000", "01110", "00000", "00000"]).unwrap();
        sim.current = start.clone();

        sim.step();
        assert_ne!(sim.grid(), &start);
        sim.step();
        assert_eq!(sim.grid(), &start);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let mut sim = LifeSimulation::new(config(8, 8), &Glider::default()).unwrap();
        let mut seen = Vec::new();
        let stats = sim
            .run_with_observer(4, |generation, grid| {
                seen.push((generation, grid.population()));
                Ok(())
            })
            .unwrap();

        assert_eq!(stats.turns, 4);
        assert_eq!(seen.iter().map(|(g, _)| *g).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        // A glider always has five live cells
        assert!(seen.iter().all(|&(_, population)| population == 5));
    }

    #[test]
    fn test_observer_error_stops_run() {
        let mut sim = LifeSimulation::new(config(8, 8), &Glider::default()).unwrap();
        let result = sim.run_with_observer(10, |generation, _| {
            if generation == 2 {
                Err(LifeError::from(std::io::Error::other("sink closed")))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_into_grid_returns_latest_generation() {
        let mut sim = LifeSimulation::new(config(6, 6), &Glider::default()).unwrap();
        sim.run(1);
        let latest = sim.grid().clone();
        assert_eq!(sim.into_grid(), latest);
    }
}
