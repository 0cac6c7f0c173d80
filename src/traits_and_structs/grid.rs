use std::fmt;

use super::cell::Cell;
use super::error::Error;

/// One generation of a Life board: `rows * columns` cells, row-major.
///
/// A grid is never mutated after construction. Every cell's own coordinates
/// match its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Builds a grid whose cell at `(row, column)` is alive when `f(row, column)` is.
    ///
    /// `f` is called once per cell in row-major order.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if rows == 0 || columns == 0 {
            return Err(Error::EmptyGrid { rows, columns });
        }
        let size = rows
            .checked_mul(columns)
            .ok_or(Error::GridTooLarge { rows, columns })?;
        let mut cells = Vec::with_capacity(size);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(row, column, f(row, column)));
            }
        }
        Ok(Self {
            cells,
            rows,
            columns,
        })
    }

    /// Builds a grid with exactly the listed `(row, column)` cells alive.
    pub fn from_alive_cells(
        rows: usize,
        columns: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, Error> {
        let mut grid = Self::from_fn(rows, columns, |_, _| false)?;
        for &(row, column) in alive {
            let i = grid
                .grid_idx(row, column)
                .ok_or(Error::CellOutOfBounds { row, column })?;
            grid.cells[i] = grid.cells[i].next_state(true);
        }
        Ok(grid)
    }

    /// Builds a grid from nested rows of states.
    pub fn from_rows(states: Vec<Vec<bool>>) -> Result<Self, Error> {
        let rows = states.len();
        let columns = states.first().map_or(0, Vec::len);
        if let Some((row, found)) = states
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(Error::RaggedRows {
                row,
                expected: columns,
                found,
            });
        }
        Self::from_fn(rows, columns, |row, column| states[row][column])
    }

    /// A grid of the same shape whose cells take the states `f` gives for
    /// the cells of `self`.
    #[must_use]
    pub fn map_states<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Cell) -> bool,
    {
        Self {
            cells: self.cells.iter().map(|c| c.next_state(f(c))).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get<I: TryInto<usize>>(&self, row: I, column: I) -> Option<&Cell> {
        self.grid_idx(row, column).map(|i| &self.cells[i])
    }

    /// Whether the cell is alive. Positions outside the grid are dead.
    pub fn is_alive<I: TryInto<usize>>(&self, row: I, column: I) -> bool {
        self.get(row, column).is_some_and(Cell::is_alive)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn grid_idx<I: TryInto<usize>>(&self, row: I, column: I) -> Option<usize> {
        if let (Ok(row), Ok(column)) = (row.try_into(), column.try_into()) {
            if row < self.rows && column < self.columns {
                Some(column + row * self.columns)
            } else {
                None
            }
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_match_positions() {
        let grid = Grid::from_fn(3, 5, |r, c| (r + c) % 2 == 0).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (3, 5));
        assert_eq!(grid.iter_rows().count(), 3);
        for (r, row) in grid.iter_rows().enumerate() {
            assert_eq!(row.len(), 5);
            for (c, cell) in row.iter().enumerate() {
                assert_eq!((cell.row(), cell.column()), (r, c));
                assert_eq!(cell.is_alive(), (r + c) % 2 == 0);
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::from_fn(0, 4, |_, _| true),
            Err(Error::EmptyGrid { rows: 0, columns: 4 })
        ));
        assert!(matches!(
            Grid::from_fn(4, 0, |_, _| true),
            Err(Error::EmptyGrid { rows: 4, columns: 0 })
        ));
        assert!(matches!(Grid::from_rows(vec![]), Err(Error::EmptyGrid { .. })));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            Grid::from_fn(usize::MAX, 2, |_, _| false),
            Err(Error::GridTooLarge { .. })
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![true, false], vec![true], vec![false, false]]);
        assert!(matches!(
            err,
            Err(Error::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn alive_cells_out_of_bounds() {
        assert!(matches!(
            Grid::from_alive_cells(2, 2, &[(0, 0), (2, 1)]),
            Err(Error::CellOutOfBounds { row: 2, column: 1 })
        ));
    }

    #[test]
    fn lookups_outside_are_dead() {
        let grid = Grid::from_alive_cells(2, 2, &[(0, 0), (1, 1)]).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(0, 1));
        assert!(!grid.is_alive(-1isize, 0));
        assert!(!grid.is_alive(0isize, -1));
        assert!(!grid.is_alive(2, 0));
        assert!(grid.get(1, 2).is_none());
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn display_draws_rows() {
        let grid = Grid::from_rows(vec![vec![true, false, false], vec![false, true, true]]).unwrap();
        assert_eq!(grid.to_string(), "O..\n.OO\n");
    }
}
