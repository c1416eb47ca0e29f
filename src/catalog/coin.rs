use crate::*;

/// Matching coins: the row player receives `same` when the coins match
/// and `diff` when they differ.
pub fn coin_with(same: Payoff, diff: Payoff) -> PayoffMatrix {
    PayoffMatrix::from([[same, diff], [diff, same]])
}

/// Heads/tails with the default stakes.
pub fn coin() -> PayoffMatrix {
    coin_with(COIN_SAME, COIN_DIFF)
}
