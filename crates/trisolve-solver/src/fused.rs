//! Fused team-local solver: the whole recurrence in one dispatch.
//!
//! One task owns one system. The task allocates a private `c_prime` /
//! `y_prime` scratch pair scoped to that single invocation and runs the
//! forward and backward sweeps as an ordinary sequential loop; no other
//! task can observe the scratch and no cross-level fence exists because the
//! sequence never leaves the task. The only synchronization point is the
//! join at the end of the dispatch, versus `2 * nk` fences for the leveled
//! baseline.

use rayon::prelude::*;

use crate::dispatch::DispatchConfig;
use crate::error::Result;
use crate::leveled::{flags_to_indices, solve_batch_sequential};
use crate::strategy::{Strategy, ThomasSolver};
use crate::thomas::solve_system_scalar;
use trisolve_core::{SolveGrid, TridiagBatch};

/// Team-local Thomas solver: one task per system, single dispatch.
#[derive(Debug, Clone, Default)]
pub struct FusedSolver {
    config: DispatchConfig,
}

impl FusedSolver {
    /// Create a new fused solver.
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    fn solve_parallel(&self, batch: &TridiagBatch) -> (Vec<f64>, Vec<bool>) {
        let ni = batch.ni();
        let nk = batch.nk();

        let mut out = vec![0.0; ni * nk];
        let mut degenerate = vec![false; ni];

        log::trace!("fused solve: {ni} systems x {nk} levels, single dispatch");

        out.par_chunks_mut(nk)
            .zip(degenerate.par_iter_mut())
            .enumerate()
            .for_each(|(i, (row, flag))| {
                // Task-private scratch, fresh per invocation. Nothing to
                // reset between benchmark repetitions because nothing
                // outlives the task.
                let mut c_prime = vec![0.0; nk];
                let mut y_prime = vec![0.0; nk];

                *flag = solve_system_scalar(
                    batch.sub_row(i),
                    batch.diag_row(i),
                    batch.sup_row(i),
                    batch.rhs_row(i),
                    &mut c_prime,
                    &mut y_prime,
                    row,
                );
            });

        (out, degenerate)
    }
}

impl ThomasSolver for FusedSolver {
    fn solve(&self, batch: &TridiagBatch) -> Result<SolveGrid> {
        let ni = batch.ni();
        log::debug!("fused solve of {ni} systems: {}", self.config.describe(ni));

        let (values, degenerate) = if self.config.use_parallel(ni) {
            self.solve_parallel(batch)
        } else {
            solve_batch_sequential(batch)
        };

        let degenerate_systems = flags_to_indices(&degenerate);
        Ok(SolveGrid::new(ni, batch.nk(), values, degenerate_systems)?)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Fused
    }
}
