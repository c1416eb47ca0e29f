use crate::*;

/// Both players name an integer in `1..=k`. When the row player's `i` is at
/// least the column player's `j` the row player wins `i - j`, otherwise they
/// lose `i + j`.
pub fn integers(k: usize) -> PayoffMatrix {
    PayoffMatrix::from_fn(k, k, |i, j| {
        let (i, j) = (i as Payoff + 1, j as Payoff + 1);
        if i >= j { i - j } else { -(i + j) }
    })
}
