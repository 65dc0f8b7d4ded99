//! Solver strategy selection.

use crate::dispatch::DispatchConfig;
use crate::error::Result;
use crate::fused::FusedSolver;
use crate::leveled::LeveledSolver;
use trisolve_core::{SolveGrid, TridiagBatch};

/// Which parallelization strategy to use for a batched solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Automatically select (resolves to the fused strategy).
    #[default]
    Auto,
    /// One synchronized parallel pass per level (`2 * nk` dispatches).
    Leveled,
    /// One task per system, whole recurrence inside the task (1 dispatch).
    Fused,
}

impl Strategy {
    /// Parse from a string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "naive" | "leveled" | "row" => Some(Self::Leveled),
            "fused" | "team" => Some(Self::Fused),
            _ => None,
        }
    }

    /// Resolve `Auto` to a concrete strategy.
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => Self::Fused,
            other => other,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Auto => write!(f, "auto"),
            Strategy::Leveled => write!(f, "leveled"),
            Strategy::Fused => write!(f, "fused"),
        }
    }
}

/// A batched Thomas solver.
///
/// Implementations must be pure with respect to their inputs: same batch in,
/// same grid out, no timing or I/O. Both strategies implement the same
/// recurrence and must agree to floating-point tolerance; only the dispatch
/// structure differs.
pub trait ThomasSolver: Send + Sync {
    /// Solve every system in the batch.
    fn solve(&self, batch: &TridiagBatch) -> Result<SolveGrid>;

    /// The strategy this solver implements.
    fn strategy(&self) -> Strategy;
}

/// Create a solver for the requested strategy.
pub fn create_solver(strategy: Strategy, config: DispatchConfig) -> Box<dyn ThomasSolver> {
    let resolved = strategy.resolve();
    log::debug!("creating {resolved} solver (requested {strategy})");
    match resolved {
        Strategy::Leveled => Box::new(LeveledSolver::new(config)),
        Strategy::Fused | Strategy::Auto => Box::new(FusedSolver::new(config)),
    }
}
