pub mod cs;
pub mod error;
pub mod harness;

pub use cs::{combinatorial, dynamic};
pub use error::{Error, Result};
