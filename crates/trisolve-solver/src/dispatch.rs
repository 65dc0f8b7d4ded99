//! Dispatch configuration for batched solves.
//!
//! Controls when a solve is worth forking onto the rayon pool at all: for a
//! handful of systems the dispatch overhead dwarfs the recurrence, so small
//! batches run on the calling thread with the scalar kernel.

/// Batch sizes below this run sequentially by default.
pub const PARALLEL_THRESHOLD: usize = 8;

/// Solver dispatch configuration.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Minimum number of systems before the rayon pool is used.
    pub parallel_threshold: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl DispatchConfig {
    /// Configuration that always parallelizes, regardless of batch size.
    pub fn always_parallel() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }

    /// Configuration that never touches the rayon pool.
    pub fn sequential_only() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Set the parallel threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Decide whether to use the rayon pool for a given batch size.
    pub fn use_parallel(&self, ni: usize) -> bool {
        ni >= self.parallel_threshold
    }

    /// Human-readable description of the dispatch decision for a size.
    pub fn describe(&self, ni: usize) -> &'static str {
        if self.use_parallel(ni) {
            "parallel (rayon pool)"
        } else {
            "sequential (calling thread)"
        }
    }
}
