// grid.rs - Grid and Snapshot types for the toroidal Game of Life

use std::fmt;

use crate::error::GridError;

pub const GRID_SIZE: usize = 51;                      // Side length of the reference grid (51x51)

/// Owned, mutable N x N board of cell states. N never changes once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,  // Row-major, size * size
}

/// Frozen copy of a grid. Has no mutating operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    size: usize,
    cells: Box<[bool]>,
}

impl Grid {
    /// All cells dead. Panics on a zero-sized grid, which has no cells to wrap onto.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be non-zero");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Flip one cell in place.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = !self.cells[index];
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            cells: self.cells.clone().into_boxed_slice(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate `(row, col, alive)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i / size, i % size, alive))
    }

    // Engine writes go through here; its indices are in range by construction.
    pub(crate) fn put(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.size + col] = alive;
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        checked_index(self.size, row, col)
    }
}

impl Snapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = checked_index(self.size, row, col)?;
        Ok(self.cells[index])
    }

    pub(crate) fn alive(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }
}

impl From<Snapshot> for Grid {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            size: snapshot.size,
            cells: snapshot.cells.into_vec(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn checked_index(size: usize, row: usize, col: usize) -> Result<usize, GridError> {
    if row >= size || col >= size {
        return Err(GridError::IndexOutOfRange { row, col, size });
    }
    Ok(row * size + col)
}
