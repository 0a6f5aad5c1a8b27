// engine.rs - Generation transition with toroidal neighbor counting

use crate::grid::{Grid, Snapshot};
use crate::wrap::torus;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Compute the generation after `current`.
///
/// Every cell reads the frozen snapshot and writes into a freshly allocated
/// grid, so no cell ever observes a neighbour's new state.
pub fn next_generation(current: &Snapshot) -> Grid {
    let size = current.size();
    let mut next = Grid::new(size);

    for row in 0..size {
        for col in 0..size {
            let count = live_neighbors(current, row, col);
            next.put(row, col, next_state(current.alive(row, col), count));
        }
    }

    next
}

/// Live cells among the 8 surrounding positions, wrapping at every edge.
pub fn live_neighbors(current: &Snapshot, row: usize, col: usize) -> u8 {
    let size = current.size();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        if current.alive(torus(row, dr, size), torus(col, dc, size)) {
            count += 1;
        }
    }
    count
}

/// B3/S23.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        (true, _)             => false,  // Under- or overpopulation
        (false, _)            => false,  // Stays dead
    }
}
