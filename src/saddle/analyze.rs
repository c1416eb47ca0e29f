use crate::*;

impl PayoffMatrix {
    /// Find every pure-strategy equilibrium of the game.
    ///
    /// An empty matrix has none. Otherwise a saddle point exists iff
    /// maximin equals minimax; the saddle cells are those equal to that
    /// value which are also the minimum of their row and the maximum of
    /// their column, reported in row-major order.
    pub fn equilibrium(&self) -> Equilibrium {
        let Some(ref guarantees) = Guarantees::of(self) else {
            log::debug!("{}x{} matrix is empty", self.rows(), self.cols());
            return Equilibrium::none();
        };
        let maximin = guarantees.maximin();
        let minimax = guarantees.minimax();
        if maximin != minimax {
            log::debug!(
                "{}x{} matrix has no saddle point (maximin {} < minimax {})",
                self.rows(),
                self.cols(),
                maximin,
                minimax
            );
            return Equilibrium::none();
        }
        let value = maximin;
        let cells = self
            .cells()
            .filter(|&(_, v)| v == value)
            .filter(|&(cell, _)| guarantees.is_saddle(self, cell))
            .map(|(cell, _)| cell)
            .collect::<Vec<Cell>>();
        log::debug!(
            "{}x{} matrix has value {} at {} saddle point(s)",
            self.rows(),
            self.cols(),
            value,
            cells.len()
        );
        Equilibrium::saddle(value, cells)
    }
}

/// Analyze raw rows, rejecting ragged input instead of guessing its shape.
pub fn analyze(rows: &[Vec<Payoff>]) -> Result<Equilibrium, MatrixError> {
    PayoffMatrix::try_from(rows).map(|matrix| matrix.equilibrium())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chicken() {
        let e = analyze(&[vec![-2, 2], vec![0, 1]]).unwrap();
        assert!(e.exists());
        assert_eq!(e.value(), Some(0));
        assert_eq!(e.cells(), &[Cell(1, 0)]);
    }

    #[test]
    fn rock_paper_scissors() {
        let e = analyze(&[vec![0, -1, 1], vec![1, 0, -1], vec![-1, 1, 0]]).unwrap();
        assert!(!e.exists());
        assert_eq!(e.value(), None);
        assert!(e.cells().is_empty());
    }

    #[test]
    fn twin_saddle_points() {
        let e = analyze(&[vec![1, 2], vec![1, 2]]).unwrap();
        assert_eq!(e, Equilibrium::saddle(1, vec![Cell(0, 0), Cell(1, 0)]));
    }

    #[test]
    fn empty_inputs() {
        let cases: [Vec<Vec<Payoff>>; 3] = [vec![], vec![vec![]], vec![vec![], vec![]]];
        for rows in cases {
            let e = analyze(&rows).unwrap();
            assert!(!e.exists());
            assert!(e.cells().is_empty());
        }
    }

    #[test]
    fn singleton() {
        let e = analyze(&[vec![5]]).unwrap();
        assert_eq!(e, Equilibrium::saddle(5, vec![Cell(0, 0)]));
    }

    #[test]
    fn ragged_input_is_rejected() {
        let err = analyze(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, MatrixError::Malformed { row: 1, .. }));
        assert!(analyze(&[vec![1], vec![2, 3]]).is_err());
    }

    #[test]
    fn value_alone_is_not_enough() {
        // (0,1) equals the value but is not its column's maximum.
        let e = PayoffMatrix::from([[1, 1], [0, 2]]).equilibrium();
        assert_eq!(e, Equilibrium::saddle(1, vec![Cell(0, 0)]));
    }

    #[test]
    fn constant_matrix_is_all_saddles() {
        let e = PayoffMatrix::from_fn(2, 3, |_, _| 7).equilibrium();
        assert_eq!(e.value(), Some(7));
        assert_eq!(e.cells().len(), 6);
    }

    #[test]
    fn rectangular_shapes() {
        let wide = PayoffMatrix::from([[4, 2, 5], [1, 0, 3]]).equilibrium();
        assert_eq!(wide, Equilibrium::saddle(2, vec![Cell(0, 1)]));
        let tall = PayoffMatrix::from([[4, 1], [2, 0], [5, 3]]).equilibrium();
        assert_eq!(tall, Equilibrium::saddle(3, vec![Cell(2, 1)]));
    }

    #[test]
    fn extreme_payoffs() {
        let e = PayoffMatrix::from([[Payoff::MIN, Payoff::MAX], [Payoff::MIN, Payoff::MIN]])
            .equilibrium();
        assert_eq!(e, Equilibrium::saddle(Payoff::MIN, vec![Cell(0, 0), Cell(1, 0)]));
    }

    #[test]
    fn random_matrices_uphold_saddle_conditions() {
        for _ in 0..1024 {
            let ref matrix = PayoffMatrix::random();
            let g = Guarantees::of(matrix).unwrap();
            let e = matrix.equilibrium();
            assert_eq!(e.exists(), g.maximin() == g.minimax());
            match e.value() {
                None => assert!(e.cells().is_empty()),
                Some(value) => {
                    assert_eq!(value, g.maximin());
                    assert_eq!(value, g.minimax());
                    assert!(!e.cells().is_empty(), "saddle without cells in\n{}", matrix);
                    for &cell in e.cells() {
                        assert_eq!(matrix[cell], value);
                        assert_eq!(matrix[cell], g.row_minima()[cell.row()]);
                        assert_eq!(matrix[cell], g.column_maxima()[cell.col()]);
                    }
                    assert!(e.cells().windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn random_matrices_report_every_saddle() {
        for _ in 0..256 {
            let ref matrix = PayoffMatrix::random();
            let g = Guarantees::of(matrix).unwrap();
            let brute = matrix
                .cells()
                .map(|(cell, _)| cell)
                .filter(|&cell| g.is_saddle(matrix, cell))
                .collect::<Vec<Cell>>();
            assert_eq!(matrix.equilibrium().cells(), brute.as_slice());
        }
    }

    #[test]
    fn opponent_sees_negated_value() {
        for _ in 0..256 {
            let ref matrix = PayoffMatrix::random();
            let mine = matrix.equilibrium();
            let theirs = matrix.opponent().equilibrium();
            assert_eq!(mine.exists(), theirs.exists());
            assert_eq!(mine.value(), theirs.value().map(|v| -v));
            let mut flipped = theirs
                .cells()
                .iter()
                .map(|c| Cell(c.col(), c.row()))
                .collect::<Vec<Cell>>();
            flipped.sort();
            assert_eq!(mine.cells(), flipped.as_slice());
        }
    }
}
