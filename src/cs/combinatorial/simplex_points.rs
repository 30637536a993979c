//! Generators for the integer points of a simplex surface: every sequence of
//! `dims` non-negative integers summing to `total` (weak compositions of
//! `total` into `dims` parts). In 3D these lie on a triangle, in 4D on a
//! tetrahedron, and so on.
//!
//! Both generators produce the points in the same order: lexicographically
//! ascending, so the first coordinate changes slowest.
//!
//! # Example
//! ```
//! use change_making::cs::combinatorial::simplex_points::{simplex_coordinates, simplex_points};
//!
//! let points = simplex_points(2, 3);
//! assert_eq!(points, vec![
//!     vec![0, 0, 2],
//!     vec![0, 1, 1],
//!     vec![0, 2, 0],
//!     vec![1, 0, 1],
//!     vec![1, 1, 0],
//!     vec![2, 0, 0],
//! ]);
//!
//! let coords = simplex_coordinates(2, 3).unwrap();
//! assert_eq!(coords.nrows(), 6);
//! assert_eq!(coords.row(3).to_vec(), vec![1, 0, 1]);
//! ```
use std::ops::ControlFlow;

use ndarray::Array2;

/// Number of simplex points, `C(total + dims - 1, dims - 1)`.
///
/// Returns `None` if the count does not fit in a `u64`. Zero dimensions hold
/// no points.
pub fn simplex_point_count(total: u64, dims: usize) -> Option<u64> {
    if dims == 0 {
        return Some(0);
    }
    // After step i the running value is C(total + i, i), so each division is exact.
    let mut count: u128 = 1;
    for i in 1..dims as u128 {
        count = count.checked_mul(total as u128 + i)? / i;
    }
    u64::try_from(count).ok()
}

/// Visits every simplex point in order, stopping early when `visit` breaks.
///
/// Coordinates are fixed left to right: each ranges over `0..=remaining` and
/// the last one takes whatever remains. The recursion is `dims` deep.
pub fn for_each_simplex_point<B, F>(total: u64, dims: usize, mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&[u64]) -> ControlFlow<B>,
{
    if dims == 0 {
        return ControlFlow::Continue(());
    }
    let mut point = Vec::with_capacity(dims);
    descend(total, dims, &mut point, &mut visit)
}

fn descend<B, F>(remaining: u64, dims: usize, point: &mut Vec<u64>, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&[u64]) -> ControlFlow<B>,
{
    if point.len() == dims - 1 {
        point.push(remaining);
        let flow = visit(point);
        point.pop();
        return flow;
    }
    for x in 0..=remaining {
        point.push(x);
        let flow = descend(remaining - x, dims, point, visit);
        point.pop();
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

/// Collects every simplex point using the recursive generator.
pub fn simplex_points(total: u64, dims: usize) -> Vec<Vec<u64>> {
    let mut points = Vec::new();
    let _ = for_each_simplex_point::<(), _>(total, dims, |p| {
        points.push(p.to_vec());
        ControlFlow::Continue(())
    });
    points
}

/// Materializes every simplex point as one row of a matrix, without recursion.
///
/// Starts from `[0, .., 0, total]`. Each following row is derived from the
/// previous one: find the rightmost nonzero entry `j` and increment entry
/// `j - 1`. If `j` is the last index, the last entry gives up one unit.
/// Otherwise entries `j..` are reset to the starting row and the last entry
/// is reduced by the sum of entries `..j`. Generation ends when the only
/// nonzero entry is the first one.
///
/// Returns `None` if the number of cells does not fit in memory addressing.
pub fn simplex_coordinates(total: u64, dims: usize) -> Option<Array2<u64>> {
    if dims == 0 {
        return Some(Array2::zeros((0, 0)));
    }
    let rows = usize::try_from(simplex_point_count(total, dims)?).ok()?;
    let mut buffer = Vec::with_capacity(rows.checked_mul(dims)?);

    let last = dims - 1;
    let mut current = vec![0u64; dims];
    current[last] = total;
    buffer.extend_from_slice(&current);

    while let Some(j) = current.iter().rposition(|&c| c != 0).filter(|&j| j > 0) {
        current[j - 1] += 1;
        if j == last {
            current[last] -= 1;
        } else {
            current[j..].iter_mut().for_each(|c| *c = 0);
            let head: u64 = current[..j].iter().sum();
            current[last] = total - head;
        }
        buffer.extend_from_slice(&current);
    }

    Array2::from_shape_vec((rows, dims), buffer).ok()
}
