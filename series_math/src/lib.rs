//! # Series Math
//!
//! Small numeric building blocks shared by the forecast view layer.
//! Nothing in this crate knows about dates or payloads; it works on plain
//! `f64` values and `usize` indices.

use thiserror::Error;

pub mod paging;
pub mod sampling;
pub mod stats;

pub use paging::PageWindow;
pub use stats::{display_round, RunningStats};

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
