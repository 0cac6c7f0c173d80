//! All kinds of errors in this crate.

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },
    #[error("grid of {rows}x{columns} cells is too big")]
    GridTooLarge { rows: usize, columns: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {column}) is outside the grid")]
    CellOutOfBounds { row: usize, column: usize },
    #[error("advance interval must be positive")]
    InvalidInterval,
    #[error("failed to getrandom: {0}")]
    Entropy(#[from] getrandom::Error),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
}
