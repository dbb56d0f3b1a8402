//! Configured solver that hides the generic wiring.
//!
//! [`SolverConfig`] picks the kernel and both integer widths at runtime;
//! [`Solver::solve`] dispatches to the matching monomorphic search.

use std::fmt;
use std::time::Instant;

use tracing::{info, warn};

use bitqueens_config::{CountWidth, KernelType, MaskWidth, SolverConfig};
use bitqueens_core::{ColumnMask, Result};

use crate::driver::solve_with;
use crate::kernel::{Kernel, RecursiveKernel, StackedKernel};
use crate::statistics::SearchStatistics;

/// Result of one configured solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub width: u32,
    /// Solution count, widened from the configured count type.
    pub count: u128,
    pub statistics: SearchStatistics,
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-queen => {}", self.width, self.count)
    }
}

/// N-Queens counter driven by a [`SolverConfig`].
///
/// # Example
///
/// ```
/// use bitqueens_config::{KernelType, MaskWidth, SolverConfig};
/// use bitqueens_solver::Solver;
///
/// let solver = Solver::new(
///     SolverConfig::new()
///         .with_kernel(KernelType::Stacked)
///         .with_mask_width(MaskWidth::U16),
/// );
///
/// let outcome = solver.solve(8).unwrap();
/// assert_eq!(outcome.count, 92);
/// assert_eq!(outcome.to_string(), "8-queen => 92");
/// assert!(solver.solve(17).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Largest width the configured mask can hold.
    pub fn max_width(&self) -> u32 {
        self.config.mask_width.bits()
    }

    /// Counts the solutions for `width`.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidWidth`] when `width` is zero or does
    /// not fit the configured mask.
    ///
    /// [`QueensError::InvalidWidth`]: bitqueens_core::QueensError::InvalidWidth
    pub fn solve(&self, width: u32) -> Result<SolveOutcome> {
        let start = Instant::now();
        info!(
            event = "solve_start",
            width,
            kernel = %self.config.kernel,
            mask_width = %self.config.mask_width,
            count_width = %self.config.count_width,
        );

        let (count, nodes_explored) = match self.config.mask_width {
            MaskWidth::U8 => self.solve_masked::<u8>(width),
            MaskWidth::U16 => self.solve_masked::<u16>(width),
            MaskWidth::U32 => self.solve_masked::<u32>(width),
            MaskWidth::U64 => self.solve_masked::<u64>(width),
            MaskWidth::U128 => self.solve_masked::<u128>(width),
        }
        .inspect_err(|err| warn!(event = "solve_rejected", width, error = %err))?;

        let statistics = SearchStatistics {
            width,
            kernel: self.config.kernel,
            mask_width: self.config.mask_width,
            count_width: self.config.count_width,
            nodes_explored,
            start_columns: width / 2 + width % 2,
            duration: start.elapsed(),
        };

        info!(
            event = "solve_end",
            width,
            count = %count,
            nodes = nodes_explored,
            duration_ms = statistics.duration.as_millis() as u64,
            speed = statistics.nodes_per_second(),
        );

        Ok(SolveOutcome {
            width,
            count,
            statistics,
        })
    }

    fn solve_masked<M: ColumnMask>(&self, width: u32) -> Result<(u128, u64)> {
        match self.config.kernel {
            KernelType::Recursive => self.solve_counted::<M, _>(RecursiveKernel::new(), width),
            KernelType::Stacked => self.solve_counted::<M, _>(StackedKernel::<M>::new(), width),
        }
    }

    fn solve_counted<M, K>(&self, mut kernel: K, width: u32) -> Result<(u128, u64)>
    where
        M: ColumnMask,
        K: Kernel<M>,
    {
        let count = match self.config.count_width {
            CountWidth::U64 => solve_with::<M, u64, K>(&mut kernel, width)?.into(),
            CountWidth::U128 => solve_with::<M, u128, K>(&mut kernel, width)?,
        };
        Ok((count, kernel.nodes_explored()))
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
