//! Cross-strategy equivalence and isolation properties.
//!
//! The two solvers implement the same recurrence with different dispatch
//! structures, so for every input they must produce the same grid to
//! floating-point tolerance, and one system's coefficients must never be
//! able to influence another system's result.

use trisolve_solver::{
    DispatchConfig, FusedSolver, LeveledSolver, Strategy, ThomasSolver, create_solver,
};
use trisolve_core::{TridiagBatch, max_residual};

const TOL: f64 = 1e-9;

fn assert_grids_close(a: &[f64], b: &[f64], context: &str) {
    assert_eq!(a.len(), b.len());
    for (idx, (&va, &vb)) in a.iter().zip(b).enumerate() {
        let scale = va.abs().max(vb.abs()).max(1.0);
        assert!(
            (va - vb).abs() / scale < TOL,
            "{context}: value {idx} differs: {va} vs {vb}"
        );
    }
}

#[test]
fn leveled_and_fused_agree_on_generator_batch() {
    // 4 systems, 50 levels, diagonally dominant.
    let batch = TridiagBatch::heat_diffusion(4, 50).unwrap();

    let leveled = LeveledSolver::new(DispatchConfig::always_parallel())
        .solve(&batch)
        .unwrap();
    let fused = FusedSolver::new(DispatchConfig::always_parallel())
        .solve(&batch)
        .unwrap();

    for i in 0..4 {
        assert_grids_close(
            leveled.system(i).unwrap(),
            fused.system(i).unwrap(),
            &format!("system {i}"),
        );
    }

    assert!(max_residual(&batch, &leveled).unwrap() < TOL);
    assert!(max_residual(&batch, &fused).unwrap() < TOL);
}

#[test]
fn strategies_agree_across_batch_shapes() {
    for &(ni, nk) in &[(1, 1), (1, 64), (64, 1), (7, 13), (128, 50)] {
        let batch = TridiagBatch::heat_diffusion(ni, nk).unwrap();

        let leveled = create_solver(Strategy::Leveled, DispatchConfig::always_parallel())
            .solve(&batch)
            .unwrap();
        let fused = create_solver(Strategy::Fused, DispatchConfig::always_parallel())
            .solve(&batch)
            .unwrap();

        assert_grids_close(
            leveled.values(),
            fused.values(),
            &format!("batch {ni}x{nk}"),
        );
    }
}

#[test]
fn single_system_single_level_closed_form() {
    // a=[[0]], b=[[2]], c=[[0]], y=[[1]] => x = [[0.5]].
    let mut batch = TridiagBatch::zeros(1, 1).unwrap();
    batch.diag_row_mut(0)[0] = 2.0;
    batch.rhs_row_mut(0)[0] = 1.0;

    for strategy in [Strategy::Leveled, Strategy::Fused] {
        let grid = create_solver(strategy, DispatchConfig::default())
            .solve(&batch)
            .unwrap();
        assert_eq!(grid.system(0).unwrap(), &[0.5], "strategy {strategy}");
    }
}

#[test]
fn single_level_zero_diagonal_yields_zero() {
    let mut batch = TridiagBatch::zeros(2, 1).unwrap();
    batch.diag_row_mut(0)[0] = 4.0;
    batch.rhs_row_mut(0)[0] = 1.0;
    // System 1 has b == 0: policy says x == 0, not an error.
    batch.rhs_row_mut(1)[0] = 1.0;

    for strategy in [Strategy::Leveled, Strategy::Fused] {
        let grid = create_solver(strategy, DispatchConfig::always_parallel())
            .solve(&batch)
            .unwrap();
        assert_eq!(grid.system(0).unwrap(), &[0.25]);
        assert_eq!(grid.system(1).unwrap(), &[0.0]);
        assert_eq!(grid.degenerate_systems, vec![1]);
    }
}

#[test]
fn corrupting_one_system_does_not_affect_others() {
    let clean = TridiagBatch::heat_diffusion(6, 40).unwrap();

    let mut corrupted = clean.clone();
    corrupted.diag_row_mut(3).fill(0.0);

    for strategy in [Strategy::Leveled, Strategy::Fused] {
        let solver = create_solver(strategy, DispatchConfig::always_parallel());
        let before = solver.solve(&clean).unwrap();
        let after = solver.solve(&corrupted).unwrap();

        for i in 0..6 {
            if i == 3 {
                continue;
            }
            assert_eq!(
                before.system(i).unwrap(),
                after.system(i).unwrap(),
                "strategy {strategy}: system {i} changed when system 3 was degenerated"
            );
        }
        assert!(after.is_degenerate(3));
        assert!(!before.is_degenerate(3));
    }
}

#[test]
fn equivalence_holds_with_degenerate_pivots_present() {
    let mut batch = TridiagBatch::heat_diffusion(8, 20).unwrap();
    // Zero out the first pivot of system 5; both strategies must apply the
    // same decoupling and still agree exactly.
    batch.diag_row_mut(5)[0] = 0.0;

    let leveled = LeveledSolver::new(DispatchConfig::always_parallel())
        .solve(&batch)
        .unwrap();
    let fused = FusedSolver::new(DispatchConfig::always_parallel())
        .solve(&batch)
        .unwrap();

    assert_grids_close(leveled.values(), fused.values(), "degenerate batch");
    assert_eq!(leveled.degenerate_systems, vec![5]);
    assert_eq!(fused.degenerate_systems, vec![5]);
}

#[test]
fn repeated_runs_are_deterministic() {
    let batch = TridiagBatch::heat_diffusion(32, 50).unwrap();
    let solver = create_solver(Strategy::Auto, DispatchConfig::always_parallel());

    let first = solver.solve(&batch).unwrap();
    for _ in 0..5 {
        let again = solver.solve(&batch).unwrap();
        assert_eq!(first.values(), again.values());
    }
}
