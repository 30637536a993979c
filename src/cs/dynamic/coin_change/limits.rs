use log::warn;

use crate::error::{Error, Resource, Result};

/// Resource ceilings checked by the exhaustive strategies before and during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of coins in a partial multiset explored by the memoized minimizer.
    pub max_depth: usize,
    /// Maximum number of `u64` cells a strategy may materialize at once.
    pub max_grid_cells: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 10_000,
            max_grid_cells: 1 << 24,
        }
    }
}

impl SearchLimits {
    /// Sets the memoized minimizer's ceiling on partial-multiset size.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the ceiling on cells materialized by one grid, layer or table.
    pub fn with_max_grid_cells(mut self, max_grid_cells: usize) -> Self {
        self.max_grid_cells = max_grid_cells;
        self
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            warn!("search depth {} exceeds limit {}", depth, self.max_depth);
            return Err(Error::ResourceExhausted {
                resource: Resource::RecursionDepth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// `cells` is `None` when the size computation itself overflowed.
    pub(crate) fn check_grid(&self, cells: Option<u64>) -> Result<usize> {
        match cells {
            Some(c) if c <= self.max_grid_cells as u64 => Ok(c as usize),
            _ => {
                warn!(
                    "grid of {:?} cells exceeds limit {}",
                    cells, self.max_grid_cells
                );
                Err(Error::ResourceExhausted {
                    resource: Resource::GridCells,
                    limit: self.max_grid_cells,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let limits = SearchLimits::default()
            .with_max_depth(5)
            .with_max_grid_cells(100);
        assert_eq!(limits.max_depth, 5);
        assert_eq!(limits.max_grid_cells, 100);
    }

    #[test]
    fn test_check_depth() {
        let limits = SearchLimits::default().with_max_depth(3);
        assert!(limits.check_depth(3).is_ok());
        assert_eq!(
            limits.check_depth(4),
            Err(Error::ResourceExhausted {
                resource: Resource::RecursionDepth,
                limit: 3
            })
        );
    }

    #[test]
    fn test_check_grid() {
        let limits = SearchLimits::default().with_max_grid_cells(10);
        assert_eq!(limits.check_grid(Some(10)), Ok(10));
        assert!(limits.check_grid(Some(11)).is_err());
        // Overflowed size computations are always rejected.
        assert!(limits.check_grid(None).is_err());
    }
}
