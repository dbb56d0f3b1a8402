//! Search statistics collection and reporting.
//!
//! Tracks how much of the search tree a configured solve visited and how
//! long it took.

use std::fmt;
use std::time::Duration;

use bitqueens_config::{CountWidth, KernelType, MaskWidth};

/// Statistics for a single configured solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Board width solved.
    pub width: u32,
    /// Kernel that ran the search.
    pub kernel: KernelType,
    /// Column-mask type used.
    pub mask_width: MaskWidth,
    /// Count accumulator type used.
    pub count_width: CountWidth,
    /// Search nodes visited, including the first-row placements.
    pub nodes_explored: u64,
    /// First-row columns actually searched after mirror folding.
    pub start_columns: u32,
    /// Wall-clock time of the search.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Returns the node throughput, or zero for an unmeasurably short run.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kernel={} mask={} count={} start_columns={} nodes={} time={}ms nodes/s={}",
            self.kernel,
            self.mask_width,
            self.count_width,
            self.start_columns,
            self.nodes_explored,
            self.duration.as_millis(),
            self.nodes_per_second()
        )
    }
}
