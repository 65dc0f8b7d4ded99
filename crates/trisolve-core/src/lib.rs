//! Data model for batched tridiagonal solves.
//!
//! This crate owns the problem representation: a [`TridiagBatch`] of `ni`
//! independent tridiagonal systems with `nk` levels each, the synthetic
//! heat-diffusion generator used by the benchmark, the [`SolveGrid`]
//! solution container, and the reconstruction residual check shared by
//! tests and the harness. Solver strategies live in `trisolve-solver`.

pub mod batch;
pub mod error;
pub mod grid;

pub use batch::TridiagBatch;
pub use error::{CoreError, Result};
pub use grid::{SolveGrid, max_residual};
