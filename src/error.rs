use std::fmt;

/// The resource a search ran out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Height of the memoized minimizer's work stack.
    RecursionDepth,
    /// Number of cells in a materialized candidate grid or simplex layer.
    GridCells,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::RecursionDepth => f.write_str("recursion depth"),
            Resource::GridCells => f.write_str("grid cells"),
        }
    }
}

/// Outcomes of a change-making strategy other than a composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Empty denomination set, a zero denomination, or denominations that
    /// are not strictly increasing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No composition of the denominations sums exactly to the target.
    #[error("no combination of coins sums to {target}")]
    Infeasible { target: u64 },

    /// The search hit a configured ceiling before resolving.
    #[error("{resource} limit of {limit} exceeded")]
    ResourceExhausted { resource: Resource, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
