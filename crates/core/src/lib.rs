//! Game of Life Simulation Core Library
//!
//! Conway's Game of Life on a fixed-size toroidal grid, advanced generation by
//! generation with the rows of each generation computed in parallel.
//!
//! ## Pipeline
//!
//! - [`init`]: seed the starting grid (seeded random fill, glider, empty)
//! - [`LifeSimulation`]: double-buffered engine running on its own Rayon pool
//! - [`report`]: write the final grid as rows of `0`/`1` digits
//!
//! ```rust,no_run
//! use life_sim_core::{LifeSimulation, SimulationConfig};
//! use life_sim_core::report::{FileSink, GridSink};
//!
//! let config = SimulationConfig::new(512, 512).with_seed(5489);
//! let mut sim = LifeSimulation::with_random_fill(config)?;
//! sim.run(100);
//! FileSink::new("output.txt").emit(sim.grid(), None)?;
//! # Ok::<(), life_sim_core::LifeError>(())
//! ```

pub mod config;
pub mod core_types;
pub mod error;
pub mod init;
pub mod report;
pub mod simulation;
pub mod solver;

pub use config::SimulationConfig;
pub use core_types::{Cell, Grid};
pub use error::LifeError;
pub use init::{Empty, Glider, InitPattern, RandomFill, Seeder};
pub use simulation::{LifeSimulation, RunStats};
