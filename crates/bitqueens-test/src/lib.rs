//! Shared test fixtures for bitqueens crates.
//!
//! This crate provides reference data and independent oracles for testing.
//! It does NOT depend on `bitqueens-solver`, so the oracles share no code
//! with the implementation under test.
//!
//! - [`known`] - Published solution counts
//! - [`brute`] - Array-based backtracking oracle
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! bitqueens-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use bitqueens_test::known::known_count;
//! use bitqueens_test::brute::brute_force_count;
//! ```

pub mod brute;
pub mod known;

pub use brute::{
    brute_force_count, brute_force_solutions, brute_force_start_column_count, is_valid_placement,
    mirror,
};
pub use known::{known_count, KNOWN_COUNTS};
