//! Naive row-parallel solver: one synchronized dispatch per level.
//!
//! Parallelizes only across the `ni` independent systems. Every step of the
//! forward and backward recurrence becomes its own parallel pass over all
//! systems, and the pass boundary is the synchronization fence that keeps
//! the sequential axis ordered: `2 * nk` fences per solve. That fence count
//! is the overhead the fused solver exists to eliminate, so this variant is
//! kept as the benchmark baseline.

use rayon::prelude::*;

use crate::dispatch::DispatchConfig;
use crate::error::Result;
use crate::strategy::{Strategy, ThomasSolver};
use crate::thomas::solve_system_scalar;
use trisolve_core::{SolveGrid, TridiagBatch};

/// Row-parallel, level-synchronized Thomas solver.
#[derive(Debug, Clone, Default)]
pub struct LeveledSolver {
    config: DispatchConfig,
}

impl LeveledSolver {
    /// Create a new leveled solver.
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    fn solve_parallel(&self, batch: &TridiagBatch) -> (Vec<f64>, Vec<bool>) {
        let ni = batch.ni();
        let nk = batch.nk();
        let (sub, diag, sup, rhs) = batch.grids();

        // Row-private scratch, globally allocated: system i owns exactly
        // the half-open chunk [i*nk, (i+1)*nk) of each grid, which is what
        // par_chunks_mut hands each task. No two tasks can alias.
        let mut c_prime = vec![0.0; ni * nk];
        let mut y_prime = vec![0.0; ni * nk];
        let mut out = vec![0.0; ni * nk];
        let mut degenerate = vec![false; ni];

        log::trace!("forward sweep: {ni} systems x {nk} levels");

        // Forward elimination, level 0.
        c_prime
            .par_chunks_mut(nk)
            .zip(y_prime.par_chunks_mut(nk))
            .zip(degenerate.par_iter_mut())
            .enumerate()
            .for_each(|(i, ((cp, yp), flag))| {
                let b0 = diag[i * nk];
                if b0 != 0.0 {
                    let rec = 1.0 / b0;
                    cp[0] = sup[i * nk] * rec;
                    yp[0] = rhs[i * nk] * rec;
                } else {
                    cp[0] = 0.0;
                    yp[0] = 0.0;
                    *flag = true;
                }
            });

        // Forward elimination, levels 1..nk. Each level is a separate
        // dispatch; the recurrence reads level k-1, so a pass may not start
        // until the previous one has fully completed.
        for k in 1..nk {
            c_prime
                .par_chunks_mut(nk)
                .zip(y_prime.par_chunks_mut(nk))
                .zip(degenerate.par_iter_mut())
                .enumerate()
                .for_each(|(i, ((cp, yp), flag))| {
                    let idx = i * nk + k;
                    let pivot = diag[idx] - sub[idx] * cp[k - 1];
                    if pivot != 0.0 {
                        let rec = 1.0 / pivot;
                        cp[k] = sup[idx] * rec;
                        yp[k] = (rhs[idx] - sub[idx] * yp[k - 1]) * rec;
                    } else {
                        cp[k] = 0.0;
                        yp[k] = 0.0;
                        *flag = true;
                    }
                });
        }

        log::trace!("backward sweep: {ni} systems x {nk} levels");

        // Backward substitution, level nk-1.
        out.par_chunks_mut(nk)
            .zip(y_prime.par_chunks(nk))
            .for_each(|(o, yp)| {
                o[nk - 1] = yp[nk - 1];
            });

        // Backward substitution, levels nk-2..=0, strictly descending.
        for k in (0..nk - 1).rev() {
            out.par_chunks_mut(nk)
                .zip(y_prime.par_chunks(nk))
                .zip(c_prime.par_chunks(nk))
                .for_each(|((o, yp), cp)| {
                    o[k] = yp[k] - cp[k] * o[k + 1];
                });
        }

        (out, degenerate)
    }
}

impl ThomasSolver for LeveledSolver {
    fn solve(&self, batch: &TridiagBatch) -> Result<SolveGrid> {
        let ni = batch.ni();
        log::debug!(
            "leveled solve of {ni} systems: {}",
            self.config.describe(ni)
        );

        let (values, degenerate) = if self.config.use_parallel(ni) {
            self.solve_parallel(batch)
        } else {
            solve_batch_sequential(batch)
        };

        let degenerate_systems = flags_to_indices(&degenerate);
        Ok(SolveGrid::new(ni, batch.nk(), values, degenerate_systems)?)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Leveled
    }
}

/// Solve the whole batch on the calling thread, one system at a time.
///
/// Shared small-batch fallback for both strategies. Reuses one scratch pair
/// across systems; each system overwrites the scratch completely before
/// reading it, so no state leaks between systems.
pub(crate) fn solve_batch_sequential(batch: &TridiagBatch) -> (Vec<f64>, Vec<bool>) {
    let ni = batch.ni();
    let nk = batch.nk();

    let mut c_prime = vec![0.0; nk];
    let mut y_prime = vec![0.0; nk];
    let mut out = vec![0.0; ni * nk];
    let mut degenerate = vec![false; ni];

    for (i, row) in out.chunks_mut(nk).enumerate() {
        degenerate[i] = solve_system_scalar(
            batch.sub_row(i),
            batch.diag_row(i),
            batch.sup_row(i),
            batch.rhs_row(i),
            &mut c_prime,
            &mut y_prime,
            row,
        );
    }

    (out, degenerate)
}

pub(crate) fn flags_to_indices(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d)
        .map(|(i, _)| i)
        .collect()
}
