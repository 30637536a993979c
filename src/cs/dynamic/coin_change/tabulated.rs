use super::composition::{validate_denominations, Composition};
use super::limits::SearchLimits;
use crate::error::{Error, Result};

/// Tabulated change with the default [`SearchLimits`].
///
/// # Examples
///
/// ```
/// use change_making::cs::dynamic::coin_change::change_tabulated;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let comp = change_tabulated(&[1, 6, 10], 18).unwrap();
/// assert_eq!(comp.counts(), &[0, 3, 0]);
///
/// // Impossible to form 7 from [2, 4]
/// assert!(change_tabulated(&[2, 4], 7).is_err());
/// ```
pub fn change_tabulated(denominations: &[u64], target: u64) -> Result<Composition> {
    change_tabulated_with_limits(denominations, target, &SearchLimits::default())
}

/// Bottom-up dynamic program over every amount `0..=target`, the unbounded
/// knapsack formulation where each coin can be used any number of times.
///
/// Keeps, for each amount, the fewest coins that reach it and the index of the
/// last coin used, then walks those back from `target` to rebuild the
/// composition. The two tables hold `target + 1` entries each and count
/// against `limits.max_grid_cells`.
pub fn change_tabulated_with_limits(
    denominations: &[u64],
    target: u64,
    limits: &SearchLimits,
) -> Result<Composition> {
    validate_denominations(denominations)?;
    let amount = limits.check_grid(target.checked_add(1))? - 1;

    // dp[i] will hold the minimum number of coins to form amount i.
    // usize::MAX marks amounts that cannot be formed.
    let mut dp = vec![usize::MAX; amount + 1];
    let mut last_coin = vec![usize::MAX; amount + 1];
    dp[0] = 0; // base case

    for (index, &coin) in denominations.iter().enumerate() {
        let coin = coin as usize;
        if coin > amount {
            // Denominations are ascending, so no later coin fits either.
            break;
        }
        for curr_amount in coin..=amount {
            let prev = dp[curr_amount - coin];
            if prev != usize::MAX && prev + 1 < dp[curr_amount] {
                dp[curr_amount] = prev + 1;
                last_coin[curr_amount] = index;
            }
        }
    }

    if dp[amount] == usize::MAX {
        return Err(Error::Infeasible { target });
    }

    let mut counts = vec![0; denominations.len()];
    let mut rest = amount;
    while rest > 0 {
        let index = last_coin[rest];
        counts[index] += 1;
        rest -= denominations[index] as usize;
    }
    Ok(Composition::new(counts))
}
