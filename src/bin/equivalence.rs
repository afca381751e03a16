//! Experiment Runner for the Dense Equivalence and Product Cost Analysis.
//!
//! For each dimension `n` in the requested range, this executable draws a number of
//! seeded random tridiagonal matrices, expands each one into a dense `faer::Mat`, and
//! checks that the two agree element by element. It then times the O(n) banded
//! matrix-vector product against the O(n²) dense product on the same input and records
//! the largest discrepancy between the two results.
//!
//! One CSV row is written per dimension.

use anyhow::{Context, Result, anyhow, ensure};
use clap::Parser;
use faer::Mat;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{path::PathBuf, time::Instant};
use tridiag::{TridiagonalMatrix, equal};

/// Command-line arguments for the equivalence experiment.
#[derive(Parser, Debug)]
#[clap(
    name = "equivalence-runner",
    about = "Checks tridiagonal/dense equivalence and times banded vs dense products."
)]
struct EquivalenceArgs {
    /// Smallest dimension to test.
    #[clap(long, default_value_t = 100)]
    n_min: usize,

    /// Largest dimension to test.
    #[clap(long, default_value_t = 2000)]
    n_max: usize,

    /// Step size for iterating n.
    #[clap(long, default_value_t = 100)]
    n_step: usize,

    /// Number of random matrices per dimension.
    #[clap(long, default_value_t = 10)]
    trials: usize,

    /// Seed for the random number generator.
    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// Path to the output CSV file where results will be written.
    #[clap(long, value_name = "PATH")]
    output: PathBuf,
}

/// A single row of the output CSV.
#[derive(Debug, Serialize)]
struct EquivalenceResult {
    n: usize,
    trials: usize,
    all_equal: bool,
    max_mul_err: f64,
    tridiag_mul_s: f64,
    dense_mul_s: f64,
}

fn random_tridiagonal(rng: &mut StdRng, n: usize) -> Result<TridiagonalMatrix> {
    let mut diagonal = |len: usize| -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
    };
    let sub = diagonal(n - 1);
    let main = diagonal(n);
    let sup = diagonal(n - 1);
    TridiagonalMatrix::new(n, Some(sub), Some(main), Some(sup))
        .with_context(|| format!("Failed to build random tridiagonal matrix of size {n}"))
}

fn run_dimension(rng: &mut StdRng, n: usize, trials: usize) -> Result<EquivalenceResult> {
    let mut all_equal = true;
    let mut max_mul_err = 0.0_f64;
    let mut tridiag_mul_s = 0.0;
    let mut dense_mul_s = 0.0;

    for _ in 0..trials {
        let t = random_tridiagonal(rng, n)?;
        let dense = t.to_dense();
        all_equal &= equal(&t, &dense);

        let x: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let x_dense = Mat::from_fn(n, 1, |i, _| x[i]);

        let start_time = Instant::now();
        let y = t.mul_vec(&x)?;
        tridiag_mul_s += start_time.elapsed().as_secs_f64();

        let start_time = Instant::now();
        let y_dense = &dense * &x_dense;
        dense_mul_s += start_time.elapsed().as_secs_f64();

        let err = y
            .iter()
            .enumerate()
            .map(|(i, v)| (v - y_dense[(i, 0)]).abs())
            .fold(0.0_f64, f64::max);
        max_mul_err = max_mul_err.max(err);
    }

    Ok(EquivalenceResult {
        n,
        trials,
        all_equal,
        max_mul_err,
        tridiag_mul_s: tridiag_mul_s / trials as f64,
        dense_mul_s: dense_mul_s / trials as f64,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    let args = EquivalenceArgs::parse();
    ensure!(args.n_min >= 1, "n_min must be at least 1");
    ensure!(args.n_step >= 1, "n_step must be at least 1");
    ensure!(args.trials >= 1, "trials must be at least 1");

    log::info!(
        "Starting equivalence experiment for n in {}..={} (step {}), {} trials each...",
        args.n_min,
        args.n_max,
        args.n_step,
        args.trials
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create output file: {:?}", args.output))?;

    for n in (args.n_min..=args.n_max).step_by(args.n_step) {
        log::info!("Running for n = {n}...");
        let record = run_dimension(&mut rng, n, args.trials)?;
        if !record.all_equal {
            log::warn!("n = {n}: tridiagonal and dense representations disagree");
        }
        writer.serialize(record)?;
    }

    writer.flush()?;
    log::info!("Experiment complete. Results written to {:?}.", args.output);
    Ok(())
}
