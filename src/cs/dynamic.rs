pub mod coin_change;

// Re-export change-making strategies with descriptive names
pub use coin_change::{
    change_direct, change_greedy, change_memoized, change_simplex, change_simplex_fast,
    change_tabulated, Composition, SearchLimits,
};
