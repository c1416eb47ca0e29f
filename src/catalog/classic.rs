use crate::*;

/// Hawk/Dove. Rows and columns are (Hawk, Dove).
pub fn chicken() -> PayoffMatrix {
    PayoffMatrix::from([[-2, 2], [0, 1]])
}

/// Rows and columns are (Cooperate, Defect) with R=3, S=0, T=5, P=1.
pub fn prisoners_dilemma() -> PayoffMatrix {
    PayoffMatrix::from([[3, 0], [5, 1]])
}

/// Rows and columns are (Rock, Paper, Scissors).
pub fn rps() -> PayoffMatrix {
    PayoffMatrix::from([[0, -1, 1], [1, 0, -1], [-1, 1, 0]])
}
