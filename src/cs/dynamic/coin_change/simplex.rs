use std::ops::ControlFlow;

use log::{debug, trace};
use ndarray::{ArrayView1, Axis};

use super::composition::{validate_denominations, value, Composition};
use super::limits::SearchLimits;
use crate::cs::combinatorial::simplex_points::{
    for_each_simplex_point, simplex_coordinates, simplex_point_count,
};
use crate::error::{Error, Resource, Result};

/// Walks count vectors in order of increasing coin count and returns the
/// first one worth exactly `target`.
///
/// For each coin count from 1 up to `target / denominations[0]` (no answer can
/// hold more coins than that), every composition with that many coins is
/// generated by [`for_each_simplex_point`] and checked. The first match is
/// optimal because no smaller coin count matched. Among optima of the same
/// size the lexicographically smallest count vector is returned.
///
/// # Example
/// ```
/// use change_making::cs::dynamic::coin_change::change_simplex;
///
/// let comp = change_simplex(&[1, 4, 10], 14).unwrap();
/// assert_eq!(comp.counts(), &[0, 1, 1]);
/// ```
pub fn change_simplex(denominations: &[u64], target: u64) -> Result<Composition> {
    validate_denominations(denominations)?;
    let dims = denominations.len();
    if target == 0 {
        return Ok(Composition::zero(dims));
    }

    for coin_count in 1..=target / denominations[0] {
        let found = for_each_simplex_point(coin_count, dims, |point| {
            if value(point, denominations) == target {
                ControlFlow::Break(point.to_vec())
            } else {
                ControlFlow::Continue(())
            }
        });
        if let ControlFlow::Break(counts) = found {
            debug!("simplex search for {} matched at {} coins", target, coin_count);
            return Ok(Composition::new(counts));
        }
        trace!("no composition of {} coins matches {}", coin_count, target);
    }
    Err(Error::Infeasible { target })
}

/// Simplex enumeration with the default [`SearchLimits`], materializing each
/// layer with the non-recursive generator.
pub fn change_simplex_fast(denominations: &[u64], target: u64) -> Result<Composition> {
    change_simplex_fast_with_limits(denominations, target, &SearchLimits::default())
}

/// Same search and the same answer as [`change_simplex`], but each coin-count
/// layer is produced in full by [`simplex_coordinates`] and its values are
/// computed with one matrix-vector product before scanning for the first match.
///
/// A layer holds `C(coin_count + n - 1, n - 1)` rows of `n` cells; a layer
/// larger than `limits.max_grid_cells` returns `ResourceExhausted`.
pub fn change_simplex_fast_with_limits(
    denominations: &[u64],
    target: u64,
    limits: &SearchLimits,
) -> Result<Composition> {
    validate_denominations(denominations)?;
    let dims = denominations.len();
    if target == 0 {
        return Ok(Composition::zero(dims));
    }
    let weights = ArrayView1::from(denominations);
    let largest = denominations[dims - 1];

    for coin_count in 1..=target / denominations[0] {
        let cells = simplex_point_count(coin_count, dims)
            .and_then(|rows| rows.checked_mul(dims as u64));
        let cells = limits.check_grid(cells)?;
        let coords = simplex_coordinates(coin_count, dims).ok_or(
            Error::ResourceExhausted {
                resource: Resource::GridCells,
                limit: limits.max_grid_cells,
            },
        )?;
        trace!("layer of {} coins: {} cells", coin_count, cells);

        // Every row in the layer is worth at most `coin_count * largest`.
        let money = if coin_count.checked_mul(largest).is_some() {
            coords.dot(&weights)
        } else {
            coords.map_axis(Axis(1), |row| {
                row.iter()
                    .zip(denominations)
                    .fold(0u64, |acc, (&c, &d)| acc.saturating_add(c.saturating_mul(d)))
            })
        };
        if let Some(row) = first_match(money.as_slice(), target) {
            debug!(
                "fast simplex search for {} matched at {} coins",
                target, coin_count
            );
            return Ok(Composition::new(coords.row(row).to_vec()));
        }
    }
    Err(Error::Infeasible { target })
}

#[cfg(not(feature = "parallel"))]
fn first_match(money: Option<&[u64]>, target: u64) -> Option<usize> {
    money?.iter().position(|&v| v == target)
}

#[cfg(feature = "parallel")]
fn first_match(money: Option<&[u64]>, target: u64) -> Option<usize> {
    use rayon::prelude::*;

    money?.par_iter().position_first(|&v| v == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_tie_break() {
        // 1 + 5 and 3 + 3: [0, 2, 0] < [1, 0, 1].
        assert_eq!(change_simplex(&[1, 3, 5], 6).unwrap().counts(), &[0, 2, 0]);
        assert_eq!(
            change_simplex_fast(&[1, 3, 5], 6).unwrap().counts(),
            &[0, 2, 0]
        );
    }

    #[test]
    fn test_matches_recursive_variant() {
        let cases: &[(&[u64], u64)] = &[
            (&[1, 5, 10, 25, 100], 189),
            (&[3, 8, 10, 25, 100], 189),
            (&[1, 7, 10], 14),
            (&[2, 3, 7], 23),
        ];
        for &(denominations, target) in cases {
            assert_eq!(
                change_simplex(denominations, target),
                change_simplex_fast(denominations, target),
                "{:?} {}",
                denominations,
                target
            );
        }
    }

    #[test]
    fn test_canonical() {
        let comp = change_simplex(&[1, 5, 10, 25, 100], 189).unwrap();
        assert_eq!(comp.counts(), &[4, 0, 1, 3, 1]);
    }

    #[test]
    fn test_zero_and_infeasible() {
        assert_eq!(change_simplex(&[4, 9], 0).unwrap(), Composition::zero(2));
        assert_eq!(change_simplex_fast(&[4, 9], 0).unwrap(), Composition::zero(2));
        assert_eq!(
            change_simplex(&[2, 4], 3),
            Err(Error::Infeasible { target: 3 })
        );
        assert_eq!(
            change_simplex_fast(&[2, 4], 3),
            Err(Error::Infeasible { target: 3 })
        );
        // Target below the smallest coin: no layer to search.
        assert_eq!(
            change_simplex(&[5], 3),
            Err(Error::Infeasible { target: 3 })
        );
    }

    #[test]
    fn test_layer_limit() {
        // The 8-coin layer over 5 denominations has C(12, 4) = 495 rows of 5 cells.
        let limits = SearchLimits::default().with_max_grid_cells(2_000);
        assert_eq!(
            change_simplex_fast_with_limits(&[1, 5, 10, 25, 100], 189, &limits),
            Err(Error::ResourceExhausted {
                resource: Resource::GridCells,
                limit: 2_000
            })
        );
    }
}
