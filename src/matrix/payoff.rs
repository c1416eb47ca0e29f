use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Payoffs to the row player, stored row-major.
///
/// Entry `(i, j)` is what the row player gains when they pick row `i` and
/// the column player picks column `j`. Every row has the same length; shapes
/// with zero rows or zero columns are valid and analyze as having no
/// equilibrium.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Payoff>>", into = "Vec<Vec<Payoff>>")]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Payoff>,
}

impl PayoffMatrix {
    /// Build a `rows × cols` matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Payoff,
    {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    /// True when there is no cell to pick: zero rows or zero columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Payoff> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }
    /// # Panics
    /// If `i >= self.rows()` in a matrix with at least one column.
    pub fn row(&self, i: usize) -> &[Payoff] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    /// # Panics
    /// If `j >= self.cols()`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = Payoff> + '_ {
        assert!(j < self.cols, "column {} out of bounds for {} columns", j, self.cols);
        self.data.iter().skip(j).step_by(self.cols).copied()
    }
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Payoff]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }
    /// Every cell with its payoff, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Payoff)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(k, &v)| (Cell(k / self.cols, k % self.cols), v))
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[Cell(j, i)])
    }
    pub fn negate(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| -v).collect(),
        }
    }
    /// The same game seen from the column player's chair: `-Mᵀ`.
    pub fn opponent(&self) -> Self {
        self.transpose().negate()
    }
}

impl std::ops::Index<Cell> for PayoffMatrix {
    type Output = Payoff;
    fn index(&self, Cell(row, col): Cell) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({},{}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl TryFrom<&[Vec<Payoff>]> for PayoffMatrix {
    type Error = MatrixError;
    fn try_from(rows: &[Vec<Payoff>]) -> Result<Self, Self::Error> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::Malformed {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.iter().flatten().copied().collect(),
        })
    }
}

impl TryFrom<Vec<Vec<Payoff>>> for PayoffMatrix {
    type Error = MatrixError;
    fn try_from(rows: Vec<Vec<Payoff>>) -> Result<Self, Self::Error> {
        Self::try_from(rows.as_slice())
    }
}

impl<const R: usize, const C: usize> From<[[Payoff; C]; R]> for PayoffMatrix {
    fn from(rows: [[Payoff; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl From<PayoffMatrix> for Vec<Vec<Payoff>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.iter_rows().map(<[Payoff]>::to_vec).collect()
    }
}

impl Arbitrary for PayoffMatrix {
    fn random() -> Self {
        let rows = rand::random_range(1..=ARBITRARY_MAX_SIDE);
        let cols = rand::random_range(1..=ARBITRARY_MAX_SIDE);
        Self::from_fn(rows, cols, |_, _| {
            rand::random_range(-ARBITRARY_MAX_PAYOFF..=ARBITRARY_MAX_PAYOFF)
        })
    }
}

impl std::fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.iter_rows() {
            let line = row
                .iter()
                .map(|v| format!("{:>width$}", v, width = width))
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
