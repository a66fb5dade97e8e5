//! Initial board strategies
//!
//! A [`Seeder`] fills the engine's starting buffer once, before the first
//! generation. The engine only sees the trait, so new strategies slot in
//! without engine changes.

mod glider;
mod random;

pub use glider::Glider;
pub use random::RandomFill;

use crate::core_types::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fills a freshly allocated grid with its starting state
pub trait Seeder: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Overwrite every cell of `grid` with the initial pattern
    fn seed_grid(&self, grid: &mut Grid);
}

/// Leaves every cell dead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Seeder for Empty {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn seed_grid(&self, grid: &mut Grid) {
        grid.fill(Cell::Dead);
    }
}

/// Named initial pattern, as selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitPattern {
    /// Independent 50/50 fill from a seeded RNG
    #[default]
    Random,
    /// Single glider at the origin
    Glider,
    /// All cells dead
    Empty,
}

impl InitPattern {
    /// Build the seeder for this pattern; `seed` is used by the random fill
    pub fn seeder(self, seed: u64) -> Box<dyn Seeder> {
        match self {
            Self::Random => Box::new(RandomFill::new(seed)),
            Self::Glider => Box::new(Glider::default()),
            Self::Empty => Box::new(Empty),
        }
    }
}

impl fmt::Display for InitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Glider => "glider",
            Self::Empty => "empty",
        })
    }
}

impl FromStr for InitPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "glider" => Ok(Self::Glider),
            "empty" => Ok(Self::Empty),
            other => Err(format!(
                "unknown pattern '{other}' (expected random, glider or empty)"
            )),
        }
    }
}
