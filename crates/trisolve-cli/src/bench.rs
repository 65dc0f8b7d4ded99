//! Repetition loop and timing for one solver strategy.
//!
//! Timing lives here and nowhere else: the solver crates make no clock or
//! I/O calls, so what this module measures is exactly the dispatch plus the
//! recurrence.

use std::time::{Duration, Instant};

use trisolve_core::{SolveGrid, TridiagBatch};
use trisolve_solver::{Strategy, ThomasSolver};

/// Timing record for one benchmarked strategy.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub strategy: Strategy,
    pub ni: usize,
    pub nk: usize,
    pub reps: usize,
    pub elapsed: Duration,
}

impl RunRecord {
    /// Average wall time per repetition, in seconds.
    pub fn seconds_per_iter(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.reps as f64
    }

    /// Speedup of `self` relative to `other` (other time / self time).
    pub fn speedup_over(&self, other: &RunRecord) -> f64 {
        other.seconds_per_iter() / self.seconds_per_iter()
    }
}

impl std::fmt::Display for RunRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.6} s/iter ({} systems x {} levels, {} reps)",
            self.strategy,
            self.seconds_per_iter(),
            self.ni,
            self.nk,
            self.reps
        )
    }
}

/// Run warmup iterations, then time `reps` solves of the batch.
///
/// Returns the timing record and the grid from the final repetition.
pub fn run_benchmark(
    solver: &dyn ThomasSolver,
    batch: &TridiagBatch,
    reps: usize,
    warmup: usize,
) -> trisolve_solver::Result<(RunRecord, SolveGrid)> {
    for _ in 0..warmup {
        solver.solve(batch)?;
    }

    let start = Instant::now();
    let mut grid = solver.solve(batch)?;
    for _ in 1..reps {
        grid = solver.solve(batch)?;
    }
    let elapsed = start.elapsed();

    Ok((
        RunRecord {
            strategy: solver.strategy(),
            ni: batch.ni(),
            nk: batch.nk(),
            reps,
            elapsed,
        },
        grid,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trisolve_solver::{DispatchConfig, create_solver};

    #[test]
    fn benchmark_returns_solved_grid() {
        let batch = TridiagBatch::heat_diffusion(4, 10).unwrap();
        let solver = create_solver(Strategy::Fused, DispatchConfig::default());

        let (record, grid) = run_benchmark(&*solver, &batch, 3, 1).unwrap();

        assert_eq!(record.reps, 3);
        assert_eq!(record.ni, 4);
        assert_eq!(record.nk, 10);
        assert_eq!(grid.ni(), 4);
        assert!(record.seconds_per_iter() >= 0.0);
    }

    #[test]
    fn speedup_ratio() {
        let slow = RunRecord {
            strategy: Strategy::Leveled,
            ni: 4,
            nk: 10,
            reps: 1,
            elapsed: Duration::from_millis(100),
        };
        let fast = RunRecord {
            strategy: Strategy::Fused,
            ni: 4,
            nk: 10,
            reps: 1,
            elapsed: Duration::from_millis(25),
        };

        assert!((fast.speedup_over(&slow) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn record_display() {
        let record = RunRecord {
            strategy: Strategy::Fused,
            ni: 8,
            nk: 50,
            reps: 2,
            elapsed: Duration::from_secs(1),
        };
        let s = record.to_string();
        assert!(s.contains("fused"), "got: {s}");
        assert!(s.contains("8 systems x 50 levels"), "got: {s}");
    }
}
