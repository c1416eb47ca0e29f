/// Errors raised while building a [`super::PayoffMatrix`] from raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Row `row` has `found` entries where row 0 has `expected`.
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed matrix: row {} has {} entries, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
