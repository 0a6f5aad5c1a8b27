// config.rs - Start-time settings and fixed layout constants

use std::time::Duration;

use clap::Parser;
use life_core::{patterns, Grid, GRID_SIZE};

use crate::error::AppError;

pub const CELL_SIZE: f32 = 14.0;                      // Pixels per cell side
pub const WINDOW_TITLE: &str = "Press space for pause / unpause";

#[derive(Parser, Debug, Clone)]
#[command(name = "torus_life")]
#[command(version)]
#[command(about = "Conway's Game of Life on a 51x51 torus")]
pub struct Settings {
    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Start paused instead of running
    #[arg(long)]
    pub paused: bool,

    /// Seed the board with a named pattern (e.g. "Glider", "Pulsar")
    #[arg(long, conflicts_with = "seed")]
    pub pattern: Option<String>,

    /// Seed the board with a reproducible random fill
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause once the board repeats a recent generation
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Run without a window, printing the final board
    #[arg(long)]
    pub headless: bool,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    pub generations: u64,
}

impl Settings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Build the starting board: empty unless a pattern or seed was given.
    pub fn initial_grid(&self) -> Result<Grid, AppError> {
        let mut grid = Grid::new(GRID_SIZE);
        if let Some(name) = &self.pattern {
            let pattern = patterns::find(name).ok_or_else(|| AppError::UnknownPattern(name.clone()))?;
            patterns::stamp(&mut grid, pattern);
            log::info!("Seeded with pattern {}", pattern.name);
        } else if let Some(seed) = self.seed {
            patterns::random_fill(&mut grid, seed);
            log::info!("Seeded randomly: seed={}, population={}", seed, grid.population());
        }
        Ok(grid)
    }
}
