//! bitqueens Solver
//!
//! Counts N-Queens solutions with three occupancy bitmasks per row:
//! - Driver that exploits left-right mirror symmetry of the first row
//! - Recursive and explicitly stacked search kernels
//! - Configured [`Solver`] that picks kernel and integer widths at runtime
//! - Search statistics
//!
//! # Example
//!
//! ```
//! let counts: Vec<u64> = [4, 8]
//!     .iter()
//!     .map(|&w| bitqueens_solver::solve(w))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(counts, vec![2, 92]);
//! ```

pub mod driver;
pub mod kernel;
pub mod solver;
pub mod statistics;

pub use bitqueens_core::{ColumnMask, QueensError, Result, SolutionCount};
pub use driver::{solve, solve_many, solve_with, start_column_count};
pub use kernel::{Kernel, RecursiveKernel, StackedKernel};
pub use solver::{SolveOutcome, Solver};
pub use statistics::SearchStatistics;
