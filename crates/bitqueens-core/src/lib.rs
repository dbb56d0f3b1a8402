//! bitqueens Core - Core types and traits for bitmask N-Queens counting
//!
//! This crate provides the fundamental abstractions shared by the solver:
//! - Error types for precondition failures
//! - Numeric traits for column masks and solution counts

pub mod error;
pub mod mask;

pub use error::{QueensError, Result};
pub use mask::{validate_width, ColumnMask, SolutionCount};
