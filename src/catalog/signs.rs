use crate::*;

/// Both players pick from {-1, 0, 1}; row `s` against column `t` pays
/// `s(t - s) + t(t + s)`.
pub fn signs() -> PayoffMatrix {
    const VALUES: [Payoff; 3] = [-1, 0, 1];
    PayoffMatrix::from_fn(VALUES.len(), VALUES.len(), |i, j| {
        let (s, t) = (VALUES[i], VALUES[j]);
        s * (t - s) + t * (t + s)
    })
}
