use log::debug;
use ndarray::{ArrayD, Dimension, IxDyn};
use num_integer::Integer;

use super::composition::{validate_denominations, Composition};
use super::limits::SearchLimits;
use crate::error::{Error, Result};

/// Number of counts worth checking for each denomination.
///
/// If a larger denomination is an exact multiple `r` of `denominations[i]`,
/// an optimal answer never holds `r` or more coins of `denominations[i]`
/// (they could be swapped for a single larger coin), so the axis is cut to
/// `r` entries. Otherwise it spans `0..=target / denominations[i]`. The
/// smaller of the two applies when both are available.
///
/// # Example
/// ```
/// use change_making::cs::dynamic::coin_change::direct::axis_bounds;
///
/// assert_eq!(axis_bounds(&[1, 5, 10, 25, 100], 189), vec![5, 2, 10, 4, 2]);
/// ```
pub fn axis_bounds(denominations: &[u64], target: u64) -> Vec<u64> {
    denominations
        .iter()
        .enumerate()
        .map(|(i, &coin)| {
            // Saturates only when the true bound exceeds u64, which the grid check rejects.
            let naive = (target / coin).saturating_add(1);
            denominations[i + 1..]
                .iter()
                .find_map(|&larger| {
                    let (ratio, rem) = larger.div_rem(&coin);
                    (rem == 0).then_some(ratio)
                })
                .map_or(naive, |ratio| ratio.min(naive))
        })
        .collect()
}

/// Bounded vectorized search with the default [`SearchLimits`].
pub fn change_direct(denominations: &[u64], target: u64) -> Result<Composition> {
    change_direct_with_limits(denominations, target, &SearchLimits::default())
}

/// Builds the full grid of candidate compositions bounded by [`axis_bounds`],
/// one axis per denomination with the index on each axis being the coin count,
/// computes every cell's monetary value in one pass, and returns the matching
/// cell with the smallest coordinate sum.
///
/// The grid holds the product of all axis bounds, which grows multiplicatively
/// with the number of denominations and the target. Grids larger than
/// `limits.max_grid_cells` are rejected with `ResourceExhausted` before
/// anything is allocated.
///
/// Ties are broken by the first match in row-major order (last denomination
/// varying fastest).
///
/// # Example
/// ```
/// use change_making::cs::dynamic::coin_change::change_direct;
///
/// let comp = change_direct(&[1, 5, 10, 25, 100], 189).unwrap();
/// assert_eq!(comp.counts(), &[4, 0, 1, 3, 1]);
/// ```
pub fn change_direct_with_limits(
    denominations: &[u64],
    target: u64,
    limits: &SearchLimits,
) -> Result<Composition> {
    validate_denominations(denominations)?;

    let bounds = axis_bounds(denominations, target);
    let cells = bounds
        .iter()
        .try_fold(1u64, |acc, &b| acc.checked_mul(b));
    let cells = limits.check_grid(cells)?;
    debug!(
        "direct search for {} over {:?}: axes {:?}, {} cells",
        target, denominations, bounds, cells
    );

    // Every bound is at most `cells`, which fits in usize after the check.
    let shape: Vec<usize> = bounds.iter().map(|&b| b as usize).collect();
    let money: ArrayD<u64> = ArrayD::from_shape_fn(IxDyn(&shape), |idx| {
        idx.slice()
            .iter()
            .zip(denominations)
            .fold(0u64, |acc, (&count, &coin)| {
                acc.saturating_add((count as u64).saturating_mul(coin))
            })
    });

    money
        .indexed_iter()
        .filter(|(_, &v)| v == target)
        .min_by_key(|(idx, _)| idx.slice().iter().sum::<usize>())
        .map(|(idx, _)| Composition::new(idx.slice().iter().map(|&c| c as u64).collect()))
        .ok_or(Error::Infeasible { target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;

    #[test]
    fn test_axis_bounds_without_multiples() {
        // 3 and 8 divide nothing larger, so they fall back to target / d + 1.
        assert_eq!(
            axis_bounds(&[3, 8, 10, 25, 100], 189),
            vec![64, 24, 10, 4, 2]
        );
    }

    #[test]
    fn test_axis_bounds_capped_by_target() {
        // The ratio 100 would be looser than 7 / 1 + 1.
        assert_eq!(axis_bounds(&[1, 100], 7), vec![8, 1]);
    }

    #[test]
    fn test_non_canonical() {
        let comp = change_direct(&[3, 8, 10, 25, 100], 189).unwrap();
        assert_eq!(comp.coin_count(), 7);
        assert!(comp.is_feasible(&[3, 8, 10, 25, 100], 189));
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(change_direct(&[2, 7], 0).unwrap(), Composition::zero(2));
    }

    #[test]
    fn test_infeasible() {
        assert_eq!(
            change_direct(&[2, 4], 3),
            Err(Error::Infeasible { target: 3 })
        );
    }

    #[test]
    fn test_grid_limit() {
        let limits = SearchLimits::default().with_max_grid_cells(100);
        assert_eq!(
            change_direct_with_limits(&[3, 8, 10, 25, 100], 189, &limits),
            Err(Error::ResourceExhausted {
                resource: Resource::GridCells,
                limit: 100
            })
        );
    }

    #[test]
    fn test_max_target_rejected_not_truncated() {
        assert_eq!(axis_bounds(&[1, 2], u64::MAX), vec![2, u64::MAX / 2 + 1]);
        assert_eq!(
            change_direct(&[1, 2], u64::MAX),
            Err(Error::ResourceExhausted {
                resource: Resource::GridCells,
                limit: SearchLimits::default().max_grid_cells
            })
        );
        assert!(matches!(
            change_direct(&[1], u64::MAX),
            Err(Error::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_row_major_tie_break() {
        // 1 + 5 and 3 + 3 both use two coins; (0, 2, 0) precedes (1, 0, 1).
        let comp = change_direct(&[1, 3, 5], 6).unwrap();
        assert_eq!(comp.counts(), &[0, 2, 0]);
    }
}
