use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}
