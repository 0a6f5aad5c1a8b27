//! Core of a Game of Life simulator on a fixed-size torus.
//!
//! [`Grid`] holds the live state, [`next_generation`] turns a frozen
//! [`Snapshot`] into the following generation. Everything here is
//! synchronous and free of I/O.

mod engine;
mod error;
mod grid;
mod history;
pub mod patterns;
mod wrap;

pub use engine::{live_neighbors, next_generation, next_state};
pub use error::GridError;
pub use grid::{Grid, Snapshot, GRID_SIZE};
pub use history::{CycleHistory, HISTORY_LEN};
pub use wrap::torus;
