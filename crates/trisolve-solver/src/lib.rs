//! Batched Thomas-algorithm solvers with two parallelization strategies.
//!
//! The Thomas recurrence is strictly sequential along a system's levels but
//! every system in a batch is independent, which leaves two ways to map the
//! batch onto a fork-join pool:
//!
//! - [`LeveledSolver`] parallelizes across systems one level at a time,
//!   paying a synchronization fence per level (`2 * nk` dispatches).
//! - [`FusedSolver`] gives each system to one task that runs the whole
//!   recurrence against task-private scratch, in a single dispatch.
//!
//! Both implement [`ThomasSolver`] and the identical arithmetic in
//! [`thomas::solve_system_scalar`]; they must agree on every input. Pick one
//! via [`Strategy`] and [`create_solver`].

pub mod dispatch;
pub mod error;
pub mod fused;
pub mod leveled;
pub mod strategy;
pub mod thomas;

pub use dispatch::DispatchConfig;
pub use error::{Result, SolverError};
pub use fused::FusedSolver;
pub use leveled::LeveledSolver;
pub use strategy::{Strategy, ThomasSolver, create_solver};
