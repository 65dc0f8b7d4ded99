//! Batched tridiagonal system storage and the synthetic problem generator.
//!
//! A batch holds `ni` independent tridiagonal systems of `nk` levels each.
//! All four coefficient grids are flattened row-major: the value for
//! `(system, level)` lives at `system * nk + level`, so one system's column
//! is a contiguous slice. That layout is what lets the solvers hand each
//! parallel task a disjoint `&mut [f64]` row without any locking.

use crate::error::{CoreError, Result};

/// A batch of `ni` independent tridiagonal systems, `nk` levels each.
///
/// Grid conventions: `sub[i][0]` and `sup[i][nk-1]` are zero (there is no
/// coupling below the first level or above the last). Solvers treat `sub`,
/// `diag` and `sup` as read-only and never mutate `rhs`; results go into a
/// separate [`SolveGrid`](crate::SolveGrid).
#[derive(Debug, Clone)]
pub struct TridiagBatch {
    ni: usize,
    nk: usize,
    /// Sub-diagonal coefficients (`a`).
    sub: Vec<f64>,
    /// Main-diagonal coefficients (`b`).
    diag: Vec<f64>,
    /// Super-diagonal coefficients (`c`).
    sup: Vec<f64>,
    /// Right-hand sides (`y`).
    rhs: Vec<f64>,
}

impl TridiagBatch {
    /// Create a zero-filled batch.
    pub fn zeros(ni: usize, nk: usize) -> Result<Self> {
        if ni == 0 || nk == 0 {
            return Err(CoreError::InvalidDimension(format!(
                "batch dimensions must be positive, got ni={ni}, nk={nk}"
            )));
        }
        let len = ni * nk;
        Ok(Self {
            ni,
            nk,
            sub: vec![0.0; len],
            diag: vec![0.0; len],
            sup: vec![0.0; len],
            rhs: vec![0.0; len],
        })
    }

    /// Build the synthetic heat-diffusion test batch.
    ///
    /// Every system is diagonally dominant: constant `-0.5` coupling above
    /// and below, main diagonal `2.0 + 0.1 * sin(pi*(i+1)/ni)` (always
    /// greater than 1.8), and a smooth sinusoidal right-hand side. Indexing
    /// into the trigonometric terms is 1-based, Fortran style.
    pub fn heat_diffusion(ni: usize, nk: usize) -> Result<Self> {
        use std::f64::consts::PI;

        let mut batch = Self::zeros(ni, nk)?;
        for i in 0..ni {
            let row_phase = PI * (i + 1) as f64 / ni as f64;
            let diag_value = 2.0 + 0.1 * row_phase.sin();

            let offset = i * nk;
            for k in 0..nk {
                if k > 0 {
                    batch.sub[offset + k] = -0.5;
                }
                batch.diag[offset + k] = diag_value;
                if k < nk - 1 {
                    batch.sup[offset + k] = -0.5;
                }
                let col_phase = PI * (k + 1) as f64 / nk as f64;
                batch.rhs[offset + k] = row_phase.sin() * col_phase.cos();
            }
        }
        Ok(batch)
    }

    /// Number of independent systems.
    #[inline]
    pub fn ni(&self) -> usize {
        self.ni
    }

    /// Number of levels per system.
    #[inline]
    pub fn nk(&self) -> usize {
        self.nk
    }

    /// Total number of values per grid (`ni * nk`).
    #[inline]
    pub fn len(&self) -> usize {
        self.ni * self.nk
    }

    /// Always false: construction rejects empty dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sub-diagonal row for one system.
    #[inline]
    pub fn sub_row(&self, i: usize) -> &[f64] {
        &self.sub[i * self.nk..(i + 1) * self.nk]
    }

    /// Main-diagonal row for one system.
    #[inline]
    pub fn diag_row(&self, i: usize) -> &[f64] {
        &self.diag[i * self.nk..(i + 1) * self.nk]
    }

    /// Super-diagonal row for one system.
    #[inline]
    pub fn sup_row(&self, i: usize) -> &[f64] {
        &self.sup[i * self.nk..(i + 1) * self.nk]
    }

    /// Right-hand-side row for one system.
    #[inline]
    pub fn rhs_row(&self, i: usize) -> &[f64] {
        &self.rhs[i * self.nk..(i + 1) * self.nk]
    }

    /// Mutable main-diagonal row, for constructing custom batches.
    #[inline]
    pub fn diag_row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.diag[i * self.nk..(i + 1) * self.nk]
    }

    /// Mutable sub-diagonal row.
    #[inline]
    pub fn sub_row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.sub[i * self.nk..(i + 1) * self.nk]
    }

    /// Mutable super-diagonal row.
    #[inline]
    pub fn sup_row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.sup[i * self.nk..(i + 1) * self.nk]
    }

    /// Mutable right-hand-side row.
    #[inline]
    pub fn rhs_row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.rhs[i * self.nk..(i + 1) * self.nk]
    }

    /// Full flattened grids, for solvers that partition them directly.
    #[inline]
    pub fn grids(&self) -> (&[f64], &[f64], &[f64], &[f64]) {
        (&self.sub, &self.diag, &self.sup, &self.rhs)
    }
}
