use crate::*;

/// Morra with `fingers` fingers.
///
/// A pure strategy is a (show, guess) pair with both in `1..=fingers`,
/// indexed as `(show - 1) * fingers + (guess - 1)`, giving a
/// `fingers² × fingers²` matrix. If exactly one player guesses the other's
/// show, that player wins the total number of fingers shown; otherwise no
/// money changes hands.
pub fn morra(fingers: usize) -> anyhow::Result<PayoffMatrix> {
    anyhow::ensure!(fingers >= 1, "morra requires at least one finger");
    let n = fingers
        .checked_mul(fingers)
        .ok_or_else(|| anyhow::anyhow!("morra with {} fingers overflows", fingers))?;
    let decode = |k: usize| (k / fingers + 1, k % fingers + 1);
    Ok(PayoffMatrix::from_fn(n, n, |i, j| {
        let (show1, guess1) = decode(i);
        let (show2, guess2) = decode(j);
        let pot = (show1 + show2) as Payoff;
        match (guess1 == show2, guess2 == show1) {
            (true, false) => pot,
            (false, true) => -pot,
            _ => 0,
        }
    }))
}
