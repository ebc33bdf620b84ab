use crate::cell::Cell;

/// Neighbor counts that turn a dead cell alive.
pub const BIRTH: &[usize] = &[3];

/// Neighbor counts that keep an alive cell alive.
pub const SURVIVE: &[usize] = &[2, 3];

pub fn next_state(cell: Cell, alive_neighbors: usize) -> Cell {
    let alive = match cell {
        Cell::Alive => SURVIVE.contains(&alive_neighbors),
        Cell::Dead => BIRTH.contains(&alive_neighbors),
    };

    Cell::from(alive)
}
