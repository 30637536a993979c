use num_integer::Integer;

use super::composition::{validate_denominations, Composition};
use crate::error::{Error, Result};

/// Largest-first change: take as many of the biggest coin as fit, then move on.
///
/// Only guaranteed optimal for canonical coin systems such as
/// `[1, 5, 10, 25, 100]`. For other systems it may return more coins than
/// necessary, or report `Infeasible` when a remainder is left even though an
/// exact answer exists (`[3, 5]` for 9).
///
/// # Example
/// ```
/// use change_making::cs::dynamic::coin_change::change_greedy;
///
/// let comp = change_greedy(&[1, 5, 10, 25, 100], 189).unwrap();
/// assert_eq!(comp.counts(), &[4, 0, 1, 3, 1]);
///
/// // Not optimal here: 10 + 1 + 1 + 1 + 1 instead of 7 + 7.
/// assert_eq!(change_greedy(&[1, 7, 10], 14).unwrap().coin_count(), 5);
/// ```
pub fn change_greedy(denominations: &[u64], target: u64) -> Result<Composition> {
    validate_denominations(denominations)?;

    let mut counts = vec![0; denominations.len()];
    let mut change = target;
    for (slot, &coin) in counts.iter_mut().zip(denominations).rev() {
        let (count, rest) = change.div_rem(&coin);
        *slot = count;
        change = rest;
    }

    if change == 0 {
        Ok(Composition::new(counts))
    } else {
        Err(Error::Infeasible { target })
    }
}
