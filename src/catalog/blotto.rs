use crate::*;

/// Two-position Colonel Blotto.
///
/// The attacker sends `a` of `attacker` troops to the first position and the
/// rest to the second; the defender splits `defender` troops as `c` and
/// `defender - c`. Row `a`, column `c`. The attacker wins (+1) by
/// outnumbering the defender at either position and loses (-1) otherwise.
/// Fails when a side's troop count leaves no room for the extra split.
pub fn blotto(attacker: usize, defender: usize) -> anyhow::Result<PayoffMatrix> {
    let rows = attacker
        .checked_add(1)
        .ok_or_else(|| anyhow::anyhow!("blotto attacker troops overflow: {}", attacker))?;
    let cols = defender
        .checked_add(1)
        .ok_or_else(|| anyhow::anyhow!("blotto defender troops overflow: {}", defender))?;
    Ok(PayoffMatrix::from_fn(rows, cols, |a, c| {
        if a > c || attacker - a > defender - c { 1 } else { -1 }
    }))
}
