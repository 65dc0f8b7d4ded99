//! Solution container and the reconstruction residual check.

use crate::batch::TridiagBatch;
use crate::error::{CoreError, Result};

/// Result of a batched tridiagonal solve.
///
/// Values are flattened row-major like the input grids. Systems that hit a
/// degenerate (zero) pivot during elimination are solved under the
/// decoupling policy — the offending level's intermediates are replaced by
/// zero — and recorded here so callers can tell which rows took that path.
#[derive(Debug, Clone)]
pub struct SolveGrid {
    ni: usize,
    nk: usize,
    values: Vec<f64>,
    /// Indices of systems where at least one pivot degenerated to zero.
    pub degenerate_systems: Vec<usize>,
}

impl SolveGrid {
    /// Wrap a flattened solution buffer.
    pub fn new(ni: usize, nk: usize, values: Vec<f64>, degenerate_systems: Vec<usize>) -> Result<Self> {
        if values.len() != ni * nk {
            return Err(CoreError::ShapeMismatch {
                expected: ni * nk,
                actual: values.len(),
            });
        }
        Ok(Self {
            ni,
            nk,
            values,
            degenerate_systems,
        })
    }

    /// Number of systems.
    #[inline]
    pub fn ni(&self) -> usize {
        self.ni
    }

    /// Levels per system.
    #[inline]
    pub fn nk(&self) -> usize {
        self.nk
    }

    /// Solution values for one system.
    pub fn system(&self, i: usize) -> Option<&[f64]> {
        if i >= self.ni {
            return None;
        }
        let start = i * self.nk;
        Some(&self.values[start..start + self.nk])
    }

    /// Whether a specific system hit a degenerate pivot.
    pub fn is_degenerate(&self, i: usize) -> bool {
        self.degenerate_systems.contains(&i)
    }

    /// Number of systems solved without hitting a degenerate pivot.
    pub fn num_clean(&self) -> usize {
        self.ni - self.degenerate_systems.len()
    }

    /// All values, flattened row-major.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Maximum absolute residual of the tridiagonal multiply over all systems.
///
/// For every `(i, k)` computes `a*x[k-1] + b*x[k] + c*x[k+1] - y[k]` with
/// the boundary terms dropped at `k = 0` and `k = nk-1`, and returns the
/// largest magnitude. Degenerate systems are skipped: the decoupling policy
/// deliberately discards part of those systems, so their residual is not
/// meaningful.
pub fn max_residual(batch: &TridiagBatch, grid: &SolveGrid) -> Result<f64> {
    if batch.ni() != grid.ni() || batch.nk() != grid.nk() {
        return Err(CoreError::ShapeMismatch {
            expected: batch.len(),
            actual: grid.ni() * grid.nk(),
        });
    }

    let nk = batch.nk();
    let mut worst = 0.0_f64;

    for i in 0..batch.ni() {
        if grid.is_degenerate(i) {
            continue;
        }
        let (a, b, c, y) = (
            batch.sub_row(i),
            batch.diag_row(i),
            batch.sup_row(i),
            batch.rhs_row(i),
        );
        let x = grid.system(i).expect("shape checked above");

        for k in 0..nk {
            let mut lhs = b[k] * x[k];
            if k > 0 {
                lhs += a[k] * x[k - 1];
            }
            if k < nk - 1 {
                lhs += c[k] * x[k + 1];
            }
            worst = worst.max((lhs - y[k]).abs());
        }
    }

    Ok(worst)
}
