use crate::*;

/// Worst-case guarantees of each pure strategy in a non-empty matrix.
///
/// `row_minima[i]` is what the row player is sure to get from row `i`;
/// `column_maxima[j]` is the most the column player can lose with column `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guarantees {
    row_minima: Vec<Payoff>,
    column_maxima: Vec<Payoff>,
    maximin: Payoff,
    minimax: Payoff,
}

impl Guarantees {
    /// `None` when the matrix has no rows or no columns.
    pub fn of(matrix: &PayoffMatrix) -> Option<Self> {
        if matrix.is_empty() {
            return None;
        }
        let row_minima = matrix
            .iter_rows()
            .map(|row| row.iter().copied().min())
            .collect::<Option<Vec<Payoff>>>()?;
        let column_maxima = (0..matrix.cols())
            .map(|j| matrix.column(j).max())
            .collect::<Option<Vec<Payoff>>>()?;
        let maximin = row_minima.iter().copied().max()?;
        let minimax = column_maxima.iter().copied().min()?;
        Some(Self {
            row_minima,
            column_maxima,
            maximin,
            minimax,
        })
    }

    pub fn row_minima(&self) -> &[Payoff] {
        &self.row_minima
    }
    pub fn column_maxima(&self) -> &[Payoff] {
        &self.column_maxima
    }

    /// Best worst-case payoff the row player can secure.
    pub fn maximin(&self) -> Payoff {
        self.maximin
    }
    /// Smallest loss ceiling the column player can secure.
    pub fn minimax(&self) -> Payoff {
        self.minimax
    }
    /// Distance between minimax and maximin, zero exactly when a saddle point exists.
    pub fn gap(&self) -> u64 {
        self.minimax.abs_diff(self.maximin)
    }

    /// Rows attaining the maximin, ascending.
    pub fn maximin_rows(&self) -> Vec<usize> {
        let maximin = self.maximin;
        self.row_minima
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == maximin)
            .map(|(i, _)| i)
            .collect()
    }
    /// Columns attaining the minimax, ascending.
    pub fn minimax_cols(&self) -> Vec<usize> {
        let minimax = self.minimax;
        self.column_maxima
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == minimax)
            .map(|(j, _)| j)
            .collect()
    }

    /// Whether `matrix[cell]` is simultaneously its row minimum and column maximum.
    pub fn is_saddle(&self, matrix: &PayoffMatrix, cell: Cell) -> bool {
        let v = matrix[cell];
        v == self.row_minima[cell.row()] && v == self.column_maxima[cell.col()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chicken_guarantees() {
        let g = Guarantees::of(&PayoffMatrix::from([[-2, 2], [0, 1]])).unwrap();
        assert_eq!(g.row_minima(), &[-2, 0]);
        assert_eq!(g.column_maxima(), &[0, 2]);
        assert_eq!(g.maximin(), 0);
        assert_eq!(g.minimax(), 0);
        assert_eq!(g.gap(), 0);
        assert_eq!(g.maximin_rows(), vec![1]);
        assert_eq!(g.minimax_cols(), vec![0]);
    }

    #[test]
    fn rps_guarantees() {
        let g = Guarantees::of(&PayoffMatrix::from([[0, -1, 1], [1, 0, -1], [-1, 1, 0]])).unwrap();
        assert_eq!(g.row_minima(), &[-1, -1, -1]);
        assert_eq!(g.column_maxima(), &[1, 1, 1]);
        assert_eq!(g.maximin(), -1);
        assert_eq!(g.minimax(), 1);
        assert_eq!(g.gap(), 2);
        assert_eq!(g.maximin_rows(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_has_no_guarantees() {
        assert!(Guarantees::of(&PayoffMatrix::from_fn(0, 0, |_, _| 0)).is_none());
        assert!(Guarantees::of(&PayoffMatrix::from_fn(3, 0, |_, _| 0)).is_none());
        assert!(Guarantees::of(&PayoffMatrix::from_fn(0, 3, |_, _| 0)).is_none());
    }

    #[test]
    fn single_row_and_column() {
        let row = Guarantees::of(&PayoffMatrix::from([[3, -1, 4]])).unwrap();
        assert_eq!(row.maximin(), -1);
        assert_eq!(row.minimax(), -1);
        let col = Guarantees::of(&PayoffMatrix::from([[3], [-1], [4]])).unwrap();
        assert_eq!(col.maximin(), 4);
        assert_eq!(col.minimax(), 4);
    }

    #[test]
    fn maximin_never_exceeds_minimax() {
        for _ in 0..1024 {
            let ref matrix = PayoffMatrix::random();
            let g = Guarantees::of(matrix).unwrap();
            assert!(
                g.maximin() <= g.minimax(),
                "maximin {} > minimax {} for\n{}",
                g.maximin(),
                g.minimax(),
                matrix
            );
        }
    }
}
