//! Driver: seeds the first row and applies mirror symmetry.
//!
//! Reflecting a solution left to right yields another solution, so only the
//! starting columns `0..w/2` are searched and their total is doubled. For an
//! odd width the middle column is searched once and added as is.

use tracing::debug;

use bitqueens_core::{validate_width, ColumnMask, QueensError, Result, SolutionCount};

use crate::kernel::{Kernel, RecursiveKernel};

/// Counts the solutions of the `width`-queens problem with a 64-bit mask,
/// a 64-bit count and the recursive kernel.
///
/// # Errors
///
/// Returns [`QueensError::InvalidWidth`] when `width` is zero or above 64.
///
/// # Example
///
/// ```
/// use bitqueens_solver::{solve, QueensError};
///
/// assert_eq!(solve(8), Ok(92));
/// assert_eq!(solve(1), Ok(1));
/// assert_eq!(solve(0), Err(QueensError::InvalidWidth { width: 0, max: 64 }));
/// ```
pub fn solve(width: u32) -> Result<u64> {
    solve_with::<u64, u64, _>(&mut RecursiveKernel::new(), width)
}

/// Solves each width in order, stopping at the first invalid one.
///
/// ```
/// use bitqueens_solver::solve_many;
///
/// assert_eq!(solve_many(&[4, 8]), Ok(vec![2, 92]));
/// ```
pub fn solve_many(widths: &[u32]) -> Result<Vec<u64>> {
    let mut kernel = RecursiveKernel::new();
    widths
        .iter()
        .map(|&width| solve_with::<u64, u64, _>(&mut kernel, width))
        .collect()
}

/// Counts the solutions of the `width`-queens problem.
///
/// # Type Parameters
/// * `M` - Column-mask type; `width` may not exceed its bit width
/// * `C` - Count type; must hold the result for `width`
/// * `K` - Search kernel
///
/// # Errors
///
/// Returns [`QueensError::InvalidWidth`] before any search when `width` is
/// zero or above `M::bit_width()`.
///
/// # Example
///
/// ```
/// use bitqueens_solver::{solve_with, StackedKernel};
///
/// let mut kernel = StackedKernel::<u16>::new();
/// let count: u32 = solve_with(&mut kernel, 10).unwrap();
/// assert_eq!(count, 724);
/// ```
pub fn solve_with<M, C, K>(kernel: &mut K, width: u32) -> Result<C>
where
    M: ColumnMask,
    C: SolutionCount,
    K: Kernel<M>,
{
    validate_width::<M>(width)?;

    let mut count = C::zero();
    for column in 0..width / 2 {
        let found: C = count_from_start::<M, C, K>(kernel, width, column);
        debug!(event = "start_column", width, column, count = %found);
        count = count + found;
    }

    // Mirror images of the left half.
    count = count + count;

    if width % 2 != 0 {
        let column = width / 2;
        let found: C = count_from_start::<M, C, K>(kernel, width, column);
        debug!(event = "start_column", width, column, count = %found, center = true);
        count = count + found;
    }

    Ok(count)
}

/// Counts the solutions whose first-row queen stands on `column`, without
/// any symmetry folding.
///
/// # Errors
///
/// Returns [`QueensError::InvalidWidth`] for an unrepresentable width and
/// [`QueensError::InvalidColumn`] when `column >= width`.
///
/// # Example
///
/// ```
/// use bitqueens_solver::{start_column_count, RecursiveKernel};
///
/// let mut kernel = RecursiveKernel::new();
/// let left: u64 = start_column_count::<u8, _, _>(&mut kernel, 4, 1).unwrap();
/// let right: u64 = start_column_count::<u8, _, _>(&mut kernel, 4, 2).unwrap();
/// assert_eq!((left, right), (1, 1));
/// ```
pub fn start_column_count<M, C, K>(kernel: &mut K, width: u32, column: u32) -> Result<C>
where
    M: ColumnMask,
    C: SolutionCount,
    K: Kernel<M>,
{
    validate_width::<M>(width)?;
    if column >= width {
        return Err(QueensError::InvalidColumn { column, width });
    }
    Ok(count_from_start::<M, C, K>(kernel, width, column))
}

/// Places the first queen and hands the remaining rows to the kernel.
///
/// Columns at or beyond `width` are marked occupied so the kernel's free
/// set never leaves the board.
fn count_from_start<M, C, K>(kernel: &mut K, width: u32, column: u32) -> C
where
    M: ColumnMask,
    C: SolutionCount,
    K: Kernel<M>,
{
    let queen = M::column(column);
    kernel.count_from(queen | M::beyond(width), queen, queen)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
