use std::fmt;

/// A single cell of a [`Grid`](super::grid::Grid) at one generation.
///
/// Two cells are equal only when their row, column and state all match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
}

impl Cell {
    pub fn new(row: usize, column: usize, alive: bool) -> Self {
        Self { row, column, alive }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The same position with a new state.
    #[must_use]
    pub fn next_state(self, alive: bool) -> Self {
        Self { alive, ..self }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell(row={}, column={}, {})", self.row, self.column, self.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_needs_every_field() {
        let cell = Cell::new(1, 2, true);
        assert_eq!(cell, Cell::new(1, 2, true));
        assert_ne!(cell, Cell::new(1, 2, false));
        assert_ne!(cell, Cell::new(1, 3, true));
        assert_ne!(cell, Cell::new(0, 2, true));
        // same state, different position
        assert_ne!(Cell::new(0, 0, false), Cell::new(5, 5, false));
    }

    #[test]
    fn next_state_keeps_position() {
        let cell = Cell::new(3, 4, false).next_state(true);
        assert_eq!((cell.row(), cell.column(), cell.is_alive()), (3, 4, true));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(0, 7, true).to_string(), "Cell(row=0, column=7, true)");
    }
}
