//! Stacked kernel: explicit per-row frames with manual backtracking.

use smallvec::SmallVec;

use bitqueens_core::{ColumnMask, SolutionCount};

use super::{next_row, Kernel};

/// Rows held inline before the frame stack spills to the heap.
const INLINE_ROWS: usize = 64;

/// State of one partially explored row.
#[derive(Debug, Clone, Copy)]
struct Frame<M> {
    occupied: M,
    left: M,
    right: M,
    /// Candidates not tried yet.
    free: M,
}

impl<M: ColumnMask> Frame<M> {
    fn enter(occupied: M, left: M, right: M) -> Self {
        let (left, right, free) = next_row(occupied, left, right);
        Self {
            occupied,
            left,
            right,
            free,
        }
    }
}

/// Depth-first kernel walking an explicit frame stack.
///
/// The stack is owned by the kernel and only cleared between calls, so a
/// kernel reused across solves keeps its capacity and does not allocate
/// again. Boards up to 64 wide never touch the heap.
///
/// Visits the same nodes in the same order as [`RecursiveKernel`].
///
/// [`RecursiveKernel`]: super::RecursiveKernel
#[derive(Debug, Clone)]
pub struct StackedKernel<M> {
    frames: SmallVec<[Frame<M>; INLINE_ROWS]>,
    nodes: u64,
}

impl<M: ColumnMask> StackedKernel<M> {
    pub fn new() -> Self {
        Self {
            frames: SmallVec::new(),
            nodes: 0,
        }
    }

    /// Rows the frame stack can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }
}

impl<M: ColumnMask> Default for StackedKernel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ColumnMask> Kernel<M> for StackedKernel<M> {
    fn count_from<C: SolutionCount>(&mut self, occupied: M, left: M, right: M) -> C {
        self.nodes += 1;
        if occupied == M::full() {
            return C::one();
        }

        self.frames.clear();
        self.frames.push(Frame::enter(occupied, left, right));
        let mut count = C::zero();

        while let Some(top) = self.frames.last_mut() {
            if top.free.is_zero() {
                self.frames.pop();
                continue;
            }

            let queen = top.free.lowest_column();
            top.free = top.free ^ queen;
            let child = (top.occupied | queen, top.left | queen, top.right | queen);

            self.nodes += 1;
            if child.0 == M::full() {
                count = count + C::one();
            } else {
                self.frames.push(Frame::enter(child.0, child.1, child.2));
            }
        }

        count
    }

    fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    fn reset(&mut self) {
        self.nodes = 0;
        self.frames.clear();
    }

    fn kernel_name(&self) -> &'static str {
        "stacked"
    }
}
