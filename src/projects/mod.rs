pub mod life;
pub mod viewer;

pub use life::{advance, compute_grid_colors, count_alive_neighbours, create_grid, shade};
pub use viewer::{run_life, Life};
