//! Cell state stored in the simulation grid
//!
//! One byte per cell keeps a 20000×20000 grid at ~400 MB per buffer and lets
//! the neighbour sum run on plain `u8` arithmetic.

use serde::{Deserialize, Serialize};

/// State of a single grid cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell (value 0)
    #[default]
    Dead = 0,
    /// Live cell (value 1)
    Alive = 1,
}

impl Cell {
    /// Numeric value of the cell, used directly when summing neighbours
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// ASCII digit used by the text output format (`b'0'` or `b'1'`)
    #[inline]
    pub const fn as_digit(self) -> u8 {
        b'0' + self as u8
    }

    /// Whether the cell is alive
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_one_byte() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn test_cell_values_and_digits() {
        assert_eq!(Cell::Dead.value(), 0);
        assert_eq!(Cell::Alive.value(), 1);
        assert_eq!(Cell::Dead.as_digit(), b'0');
        assert_eq!(Cell::Alive.as_digit(), b'1');
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_cell_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(Cell::Alive.is_alive());
        assert!(!Cell::Dead.is_alive());
    }
}
