pub mod combinatorial;
pub mod dynamic;

// Re-export all modules
pub use combinatorial::*;
pub use dynamic::*;
