//! Conway's Game of Life on a bounded grid, drawn with `pixels`.
//!
//! The simulation itself lives in [`projects::life`] and is made of pure
//! functions over immutable [`Grid`] snapshots. [`projects::viewer`] runs it
//! in a window.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod projects;
pub mod traits_and_structs;

pub use auxiliary::config::LifeConfig;
pub use auxiliary::randomizer::CoinSource;
pub use projects::{
    advance, compute_grid_colors, count_alive_neighbours, create_grid, run_life, shade, Life,
};
pub use traits_and_structs::{Cell, CellAutomata, Color, ColorGrid, Error, Grid};
