//! Game of Life transition rule
//!
//! The rule is written as three branches over the live-neighbour count:
//! two keeps the current state, three makes the cell alive, anything else
//! kills it. A dead cell with two neighbours therefore stays dead.

use crate::core_types::Cell;

/// Next state of a cell given its current state and live-neighbour count
#[inline(always)]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match live_neighbors {
        2 => current,
        3 => Cell::Alive,
        _ => Cell::Dead,
    }
}
