use serde::Deserialize;
use serde::Serialize;

/// Zero-based (row, column) coordinate of a matrix entry.
///
/// Ordering is row-major, so a sorted `Vec<Cell>` walks the matrix
/// top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub usize, pub usize);

impl Cell {
    pub fn row(&self) -> usize {
        self.0
    }
    pub fn col(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.0, cell.1)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
