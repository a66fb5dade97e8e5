//! Generation update solver
//!
//! The solver turns one generation into the next on the CPU:
//!
//! - [`WrapTable`] precomputes wrapped neighbour offsets for the torus
//! - [`next_state`] is the transition rule
//! - [`step_generation_cpu`] runs the rule over every cell, one Rayon task per
//!   row range, reading `current` and writing `next`
//!
//! Buffer ownership and swapping live in [`LifeSimulation`](crate::LifeSimulation).

mod generation;
mod neighbors;
pub mod profiler;
mod rules;

pub use generation::step_generation_cpu;
pub use neighbors::WrapTable;
pub use profiler::{FrameTimer, ProfilerScope};
pub use rules::next_state;
