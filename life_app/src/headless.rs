// headless.rs - Windowless runner on a single-threaded tokio runtime

use std::future::Future;
use std::time::Duration;

use life_core::{next_generation, CycleHistory, Grid};

use crate::config::Settings;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Limit,
    Cycle,
    Interrupted,
}

pub fn run(settings: &Settings) -> Result<(), AppError> {
    let grid = settings.initial_grid()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (grid, generation, reason) = runtime.block_on(drive(
        grid,
        settings.tick(),
        settings.generations,
        settings.stop_on_cycle,
        async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for Ctrl-C: {}", err);
                std::future::pending::<()>().await;
            }
        },
    ));

    log::info!(
        "Stopped ({:?}) at generation {}: population={}",
        reason,
        generation,
        grid.population()
    );
    print!("{grid}");
    Ok(())
}

/// Advance once per `tick` until `limit` generations have run, a cycle is
/// seen (when `stop_on_cycle`), or `shutdown` resolves.
pub async fn drive(
    mut grid: Grid,
    tick: Duration,
    limit: u64,
    stop_on_cycle: bool,
    shutdown: impl Future<Output = ()>,
) -> (Grid, u64, StopReason) {
    let mut interval = tokio::time::interval(tick);
    let mut history = CycleHistory::starting_at(&grid.snapshot());
    tokio::pin!(shutdown);

    for generation in 1..=limit {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                log::info!("Interrupted");
                return (grid, generation - 1, StopReason::Interrupted);
            }
            _ = interval.tick() => {}
        }

        grid = next_generation(&grid.snapshot());
        log::debug!("Generation {}: population={}", generation, grid.population());

        if stop_on_cycle && history.record(&grid.snapshot()) {
            log::info!("Cycle detected at generation {}", generation);
            return (grid, generation, StopReason::Cycle);
        }
    }

    (grid, limit, StopReason::Limit)
}
