//! Error types for the truthcheck protocol layer.

mod check;
mod classifier;

pub use check::*;
pub use classifier::*;
