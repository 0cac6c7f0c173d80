pub mod automata_trait;
pub mod cell;
pub mod color;
pub mod error;
pub mod grid;

pub use automata_trait::CellAutomata;
pub use cell::Cell;
pub use color::{Color, ColorGrid};
pub use error::Error;
pub use grid::Grid;
