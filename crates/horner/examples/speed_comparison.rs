//! Compares direct summation with the Horner form on random polynomials.
//!
//! For every dimension and maximal degree a set of random polynomials is
//! built, factorized and evaluated at random points. The table reports the
//! average operation counts, the setup cost of factorization and the
//! evaluation speedup.
//!
//! Run with: RUST_LOG=horner_factor=debug cargo run --release --example speed_comparison

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use horner::prelude::*;

const MAX_DIM: usize = 4;
const MAX_DEGREE: i64 = 5;
const SAMPLES: usize = 100;

fn all_exponent_rows(dim: usize, max_degree: i64) -> Vec<Vec<i64>> {
    let base = max_degree + 1;
    let count = (0..dim).fold(1, |acc, _| acc * base);
    (0..count)
        .map(|mut n| {
            (0..dim)
                .map(|_| {
                    let e = n % base;
                    n /= base;
                    e
                })
                .collect()
        })
        .collect()
}

/// Keeps a uniformly sized random subset of `all` with random coefficients.
fn random_settings(rng: &mut ChaCha8Rng, all: &[Vec<i64>]) -> (Vec<f64>, Vec<Vec<i64>>) {
    let keep = rng.gen_range(1..=all.len());
    let mut rows = all.to_vec();
    while rows.len() > keep {
        let i = rng.gen_range(0..rows.len());
        rows.swap_remove(i);
    }
    let coeffs = rows.iter().map(|_| rng.gen_range(-1.0..1.0)).collect();
    (coeffs, rows)
}

fn speedup(slow: Duration, fast: Duration) -> String {
    let (s, f) = (slow.as_secs_f64(), fast.as_secs_f64());
    if f <= s {
        format!("{:.2} x faster", s / f - 1.0)
    } else {
        format!("{:.2} x slower", f / s - 1.0)
    }
}

fn main() -> Result<(), PolyError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    println!(
        "{:>3} | {:>6} | {:>10} | {:>10} | {:>12} | {:>12} | {:>16}",
        "dim", "degree", "naive ops", "horner ops", "setup (ms)", "eval (ms)", "horner eval"
    );
    println!("{}", "-".repeat(86));

    for dim in 1..=MAX_DIM {
        for max_degree in 1..=MAX_DEGREE {
            let all = all_exponent_rows(dim, max_degree);
            let settings: Vec<_> = (0..SAMPLES).map(|_| random_settings(&mut rng, &all)).collect();
            let points: Vec<Vec<f64>> = (0..SAMPLES)
                .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
                .collect();

            let start = Instant::now();
            let polys = settings
                .iter()
                .map(|(c, e)| MultivarPoly::new(c, e, PolyOptions::default()))
                .collect::<PolyResult<Vec<_>>>()?;
            let naive_setup = start.elapsed();

            let start = Instant::now();
            let horners = factorize_batch(&Factorizer::default(), &polys, &BatchConfig::default())
                .into_iter()
                .collect::<PolyResult<Vec<_>>>()?;
            let horner_setup = naive_setup + start.elapsed();

            let start = Instant::now();
            let mut naive_sum = 0.0;
            for (p, x) in polys.iter().zip(&points) {
                naive_sum += p.eval(x)?;
            }
            let naive_eval = start.elapsed();

            let start = Instant::now();
            let mut horner_sum = 0.0;
            for (h, x) in horners.iter().zip(&points) {
                horner_sum += h.eval(x)?;
            }
            let horner_eval = start.elapsed();

            let naive_ops: u64 = polys.iter().map(|p| p.num_ops().total()).sum();
            let horner_ops: u64 = horners.iter().map(|h| h.num_ops().total()).sum();
            let samples = SAMPLES as u64;

            println!(
                "{:>3} | {:>6} | {:>10} | {:>10} | {:>12.3} | {:>12.3} | {:>16}",
                dim,
                max_degree,
                naive_ops / samples,
                horner_ops / samples,
                horner_setup.as_secs_f64() * 1e3,
                horner_eval.as_secs_f64() * 1e3,
                speedup(naive_eval, horner_eval),
            );
            info!(
                dim,
                max_degree,
                error = (naive_sum - horner_sum).abs(),
                "accumulated difference"
            );
        }
    }

    Ok(())
}
