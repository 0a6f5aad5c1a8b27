// main.rs - Toroidal Game of Life: window or headless entry point

use clap::Parser;
use eframe::egui;

mod app;
mod config;
mod error;
mod headless;
mod ui;

use app::LifeApp;
use config::{Settings, WINDOW_TITLE};
use error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::parse();
    log::info!(
        "Starting: grid={}x{}, tick={}ms, paused={}",
        life_core::GRID_SIZE,
        life_core::GRID_SIZE,
        settings.tick_ms,
        settings.paused
    );

    if settings.headless {
        return headless::run(&settings);
    }

    let app = LifeApp::new(&settings)?;
    let side = ui::board_side(app.grid().size());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([side, side])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}
