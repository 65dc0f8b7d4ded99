//! Benchmark harness for the batched tridiagonal solvers.
//!
//! Builds the synthetic heat-diffusion batch, drives the requested solver
//! strategy (or both, for a speedup comparison), reports timing on stderr
//! and optionally the solved grid as CSV on stdout.

mod bench;
mod output;

use anyhow::{Context, Result, bail};
use clap::Parser;

use bench::run_benchmark;
use trisolve_core::{TridiagBatch, max_residual};
use trisolve_solver::{DispatchConfig, Strategy, create_solver};

#[derive(Parser)]
#[command(name = "trisolve", version, about = "Batched tridiagonal solver benchmark")]
struct Args {
    /// Number of independent systems in the batch.
    ni: usize,

    /// Number of levels per system.
    #[arg(long, default_value_t = 50)]
    levels: usize,

    /// Timed repetitions per strategy.
    #[arg(long, default_value_t = 1)]
    reps: usize,

    /// Strategy to benchmark: naive | fused | auto | both.
    #[arg(long, default_value = "auto")]
    strategy: String,

    /// Untimed warmup repetitions per strategy.
    #[arg(long, default_value_t = 3)]
    warmup: usize,

    /// Number of systems below which solves stay on the calling thread.
    #[arg(long, default_value_t = trisolve_solver::dispatch::PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Emit the solved grid as CSV on stdout.
    #[arg(long)]
    csv: bool,

    /// Verify the solution against the original system.
    #[arg(long)]
    verify: bool,
}

enum Mode {
    Single(Strategy),
    Both,
}

fn parse_mode(name: &str) -> Option<Mode> {
    if name.eq_ignore_ascii_case("both") {
        return Some(Mode::Both);
    }
    Strategy::from_name(name).map(Mode::Single)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.ni == 0 {
        bail!("number of systems must be positive");
    }
    if args.levels == 0 {
        bail!("number of levels must be positive");
    }
    if args.reps == 0 {
        bail!("repetition count must be positive");
    }

    let mode = parse_mode(&args.strategy)
        .with_context(|| format!("unknown strategy '{}'", args.strategy))?;

    let batch = TridiagBatch::heat_diffusion(args.ni, args.levels)
        .context("failed to build benchmark batch")?;
    let config = DispatchConfig::default().with_parallel_threshold(args.parallel_threshold);

    let grid = match mode {
        Mode::Single(strategy) => {
            let solver = create_solver(strategy, config);
            let (record, grid) = run_benchmark(&*solver, &batch, args.reps, args.warmup)?;
            eprintln!("{record}");
            grid
        }
        Mode::Both => {
            let leveled = create_solver(Strategy::Leveled, config.clone());
            let fused = create_solver(Strategy::Fused, config);

            let (leveled_record, leveled_grid) =
                run_benchmark(&*leveled, &batch, args.reps, args.warmup)?;
            let (fused_record, _) = run_benchmark(&*fused, &batch, args.reps, args.warmup)?;

            eprintln!("{leveled_record}");
            eprintln!("{fused_record}");
            eprintln!("Speedup: {:.2}x", fused_record.speedup_over(&leveled_record));

            // When both strategies run, the baseline grid is reported.
            leveled_grid
        }
    };

    if args.verify {
        let residual = max_residual(&batch, &grid).context("residual check failed")?;
        eprintln!("Max residual: {residual:.3e}");
        if !grid.degenerate_systems.is_empty() {
            eprintln!(
                "Degenerate systems (skipped by check): {:?}",
                grid.degenerate_systems
            );
        }
    }

    if args.csv {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        output::write_csv(&grid, &mut handle).context("failed to write CSV output")?;
    }

    Ok(())
}
