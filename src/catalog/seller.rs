use crate::*;

/// Inventory against uncertain demand.
///
/// The seller stocks `s` in `0..=k` units (rows); nature draws demand `d` in
/// `alpha..=beta` (columns). Sold units earn `a` each and each unsold unit
/// costs `b`, so the payoff is `a * min(s, d) - b * max(0, s - d)`.
pub fn seller(k: usize, a: Payoff, b: Payoff, alpha: usize, beta: usize) -> anyhow::Result<PayoffMatrix> {
    anyhow::ensure!(
        alpha <= beta,
        "seller demand range is inverted: alpha {} > beta {}",
        alpha,
        beta
    );
    let payoff = |s: usize, d: usize| -> Option<Payoff> {
        let s = Payoff::try_from(s).ok()?;
        let d = Payoff::try_from(d).ok()?;
        if d >= s {
            a.checked_mul(s)
        } else {
            a.checked_mul(d)?.checked_sub(b.checked_mul(s - d)?)
        }
    };
    let rows = (0..=k)
        .map(|s| (alpha..=beta).map(|d| payoff(s, d)).collect::<Option<Vec<Payoff>>>())
        .collect::<Option<Vec<Vec<Payoff>>>>()
        .ok_or_else(|| anyhow::anyhow!("seller payoffs overflow for k={}, a={}, b={}", k, a, b))?;
    Ok(PayoffMatrix::try_from(rows)?)
}
