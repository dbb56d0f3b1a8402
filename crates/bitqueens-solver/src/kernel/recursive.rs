//! Recursive kernel: one call frame per row.

use bitqueens_core::{ColumnMask, SolutionCount};

use super::{next_row, Kernel};

/// Depth-first kernel using the call stack.
///
/// Recursion depth never exceeds the board width, which is itself bounded
/// by the mask's bit width.
///
/// # Example
///
/// ```
/// use bitqueens_solver::{solve_with, Kernel, RecursiveKernel};
///
/// let mut kernel = RecursiveKernel::new();
/// let count: u64 = solve_with::<u32, u64, _>(&mut kernel, 6).unwrap();
///
/// assert_eq!(count, 4);
/// assert!(Kernel::<u32>::nodes_explored(&kernel) > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecursiveKernel {
    nodes: u64,
}

impl RecursiveKernel {
    pub fn new() -> Self {
        Self::default()
    }

    fn descend<M: ColumnMask, C: SolutionCount>(&mut self, occupied: M, left: M, right: M) -> C {
        self.nodes += 1;
        if occupied == M::full() {
            return C::one();
        }

        let (left, right, mut free) = next_row(occupied, left, right);
        let mut count = C::zero();

        while !free.is_zero() {
            let queen = free.lowest_column();
            count = count + self.descend::<M, C>(occupied | queen, left | queen, right | queen);
            free = free ^ queen;
        }

        count
    }
}

impl<M: ColumnMask> Kernel<M> for RecursiveKernel {
    fn count_from<C: SolutionCount>(&mut self, occupied: M, left: M, right: M) -> C {
        self.descend(occupied, left, right)
    }

    fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    fn reset(&mut self) {
        self.nodes = 0;
    }

    fn kernel_name(&self) -> &'static str {
        "recursive"
    }
}
