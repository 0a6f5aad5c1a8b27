use thiserror::Error;

use life_core::GridError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("window error: {0}")]
    Gui(#[from] eframe::Error),

    #[error("runtime error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}
