// app.rs - Presentation loop state: run/pause, ticking and click edits

use std::time::{Duration, Instant};

use life_core::{next_generation, CycleHistory, Grid};

use crate::config::{Settings, CELL_SIZE};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// Owns the board exclusively; the engine only ever sees snapshots of it.
pub struct LifeApp {
    grid: Grid,
    state: RunState,
    tick: Duration,
    last_tick: Instant,
    generation: u64,
    history: CycleHistory,
    stop_on_cycle: bool,
}

impl LifeApp {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let grid = settings.initial_grid()?;
        let history = CycleHistory::starting_at(&grid.snapshot());
        Ok(Self {
            grid,
            state: if settings.paused { RunState::Paused } else { RunState::Running },
            tick: settings.tick(),
            last_tick: Instant::now(),
            generation: 0,
            history,
            stop_on_cycle: settings.stop_on_cycle,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggled();
        log::info!("{:?} at generation {}", self.state, self.generation);
    }

    /// Advance one generation if running and a full tick has elapsed since the last one.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state == RunState::Paused || now.duration_since(self.last_tick) < self.tick {
            return false;
        }
        self.last_tick = now;
        self.advance();
        true
    }

    pub fn advance(&mut self) {
        self.grid = next_generation(&self.grid.snapshot());
        self.generation += 1;
        log::debug!("Generation {}: population={}", self.generation, self.grid.population());

        if self.stop_on_cycle && self.history.record(&self.grid.snapshot()) {
            log::info!("Cycle detected at generation {}, pausing", self.generation);
            self.state = RunState::Paused;
            self.history.restart(&self.grid.snapshot());
        }
    }

    /// Toggle the cell under pixel `(x, y)`, measured from the grid's top-left.
    /// Clicks outside the grid are ignored.
    pub fn click(&mut self, x: f32, y: f32) -> Result<(), AppError> {
        let Some((row, col)) = pixel_to_cell(x, y, CELL_SIZE, self.grid.size()) else {
            log::trace!("Ignoring click outside grid at ({x}, {y})");
            return Ok(());
        };
        self.grid.toggle(row, col)?;
        self.history.restart(&self.grid.snapshot());
        Ok(())
    }
}

/// Integer division by the cell size; `None` when the point is off the grid.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32, size: usize) -> Option<(usize, usize)> {
    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    (row < size && col < size).then_some((row, col))
}
