//! Conway's Game of Life (B3/S23) on a bounded grid.
//!
//! Every function here is pure: a generation is read, never changed, and a
//! new [`Grid`] or [`ColorGrid`] is returned.

use crate::auxiliary::randomizer::CoinSource;
use crate::traits_and_structs::{Color, ColorGrid, Error, Grid};

/// Offsets of the eight cells around a position.
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Most darkening steps a live cell can get.
const MAX_DARKENING: usize = 4;

/// A `rows` x `columns` grid where every cell is alive on a heads from `rng`.
///
/// Flips are drawn in row-major order, one per cell.
pub fn create_grid<R>(rows: usize, columns: usize, rng: &mut R) -> Result<Grid, Error>
where
    R: CoinSource + ?Sized,
{
    Grid::from_fn(rows, columns, |_, _| rng.flip())
}

/// Number of live cells among the eight around `(row, column)`.
///
/// Positions beyond the edges count as dead; the grid does not wrap.
pub fn count_alive_neighbours(grid: &Grid, row: usize, column: usize) -> usize {
    let (row, column) = (row as isize, column as isize);
    NEIGHBOURHOOD
        .iter()
        .filter(|&&(dr, dc)| grid.is_alive(row + dr, column + dc))
        .count()
}

/// The next generation of `grid`.
pub fn advance(grid: &Grid) -> Grid {
    grid.map_states(|cell| {
        let neighbours = count_alive_neighbours(grid, cell.row(), cell.column());
        matches!(
            (cell.is_alive(), neighbours),
            (true, 2) | (true, 3) | (false, 3)
        )
    })
}

/// Display colours for `grid`: black for dead cells, a grey for live ones
/// that gets lighter the more live neighbours they have.
pub fn compute_grid_colors(grid: &Grid) -> ColorGrid {
    let colors = grid
        .cells()
        .map(|cell| {
            if cell.is_alive() {
                shade(count_alive_neighbours(grid, cell.row(), cell.column()))
            } else {
                Color::BLACK
            }
        })
        .collect();
    ColorGrid::new(colors, grid.rows(), grid.columns())
}

/// Colour of a live cell with `neighbours` live neighbours: white darkened
/// once for every missing pair of neighbours, up to four times.
pub fn shade(neighbours: usize) -> Color {
    let steps = MAX_DARKENING - (neighbours / 2).min(MAX_DARKENING);
    (0..steps).fold(Color::WHITE, |color, _| color.darker())
}
