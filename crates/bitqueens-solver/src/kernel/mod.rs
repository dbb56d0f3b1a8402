//! Row-by-row search kernels.
//!
//! A kernel receives the occupancy of the row about to be filled as three
//! masks and returns the number of ways to fill every remaining row:
//!
//! - `occupied`: columns holding a queen in some row above
//! - `left`: diagonal threats that move one column up per row
//! - `right`: diagonal threats that move one column down per row
//!
//! Columns outside the board must already be set in `occupied`, so the
//! board is complete exactly when `occupied` is full.

mod recursive;
mod stacked;

use std::fmt::Debug;

use bitqueens_core::{ColumnMask, SolutionCount};

pub use recursive::RecursiveKernel;
pub use stacked::StackedKernel;

/// Trait for counting completions of a partially filled board.
///
/// # Type Parameters
/// * `M` - The column-mask type
pub trait Kernel<M: ColumnMask>: Send + Debug {
    /// Counts the placements that complete the board from the given row
    /// state. Total over masks produced by the driver.
    fn count_from<C: SolutionCount>(&mut self, occupied: M, left: M, right: M) -> C;

    /// Number of search nodes visited since creation or the last reset.
    fn nodes_explored(&self) -> u64;

    /// Clears the node counter.
    fn reset(&mut self);

    /// Returns the kernel name.
    fn kernel_name(&self) -> &'static str;
}

/// Projects the diagonal threats onto the next row and returns them with
/// the free columns of that row.
#[inline]
pub(crate) fn next_row<M: ColumnMask>(occupied: M, left: M, right: M) -> (M, M, M) {
    let left = left << 1;
    let right = right >> 1;
    (left, right, !(occupied | left | right))
}
