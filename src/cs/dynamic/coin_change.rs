//! Exact change-making: the fewest coins from a denomination set whose face
//! values sum to a target, for arbitrary (not necessarily canonical) coin
//! systems.
//!
//! Every strategy takes the same `(denominations, target)` pair, with
//! denominations strictly increasing and positive, and returns either an
//! optimal composition or an [`Error`](crate::error::Error):
//! `Infeasible` when no exact answer exists, `ResourceExhausted` when a
//! [`SearchLimits`] ceiling trips, `InvalidInput` for a malformed denomination
//! set. When several optimal compositions exist, each strategy documents which
//! one it returns; they need not agree with each other.
//!
//! # Examples
//!
//! ```
//! use change_making::cs::dynamic::coin_change::{
//!     change_direct, change_memoized, change_simplex, change_simplex_fast,
//! };
//!
//! let denominations = [3, 8, 10, 25, 100];
//! assert_eq!(change_memoized(&denominations, 189).unwrap().len(), 7);
//! assert_eq!(change_direct(&denominations, 189).unwrap().coin_count(), 7);
//! assert_eq!(change_simplex(&denominations, 189).unwrap().coin_count(), 7);
//! assert_eq!(change_simplex_fast(&denominations, 189).unwrap().coin_count(), 7);
//! ```

pub mod composition;
pub mod direct;
pub mod greedy;
pub mod limits;
pub mod memoized;
pub mod simplex;
pub mod tabulated;


pub use composition::{coin_count, is_feasible, validate_denominations, value, Composition};
pub use direct::{change_direct, change_direct_with_limits};
pub use greedy::change_greedy;
pub use limits::SearchLimits;
pub use memoized::{change_memoized, change_memoized_with_limits};
pub use simplex::{change_simplex, change_simplex_fast, change_simplex_fast_with_limits};
pub use tabulated::{change_tabulated, change_tabulated_with_limits};
