/// Pure Rust benchmarks for the cohort path.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use iwl_calc::{run_cohort, Cohort, RiskFactor, RiskFactors};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic cohort generation.
fn make_cohort(n: usize, seed: u64) -> Result<Cohort, iwl_calc::IwlError> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let mut heights = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    let mut temps = Vec::with_capacity(n);
    let mut rates = Vec::with_capacity(n);
    let mut flags = Vec::with_capacity(n);
    for _ in 0..n {
        heights.push(45.0 + next_f64() * 110.0);
        weights.push(2.0 + next_f64() * 38.0);
        temps.push(36.0 + next_f64() * 4.0);
        rates.push(15.0 + next_f64() * 55.0);
        let mask = (next_f64() * 16.0) as usize;
        let set: RiskFactors = RiskFactor::ALL
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, f)| f)
            .collect();
        flags.push(set);
    }
    Cohort::new(heights, weights, temps, rates, flags)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_cohort(sizes: &[usize]) -> Result<Vec<(usize, Duration)>, iwl_calc::IwlError> {
    let mut results = Vec::new();

    for &n in sizes {
        let cohort = make_cohort(n, 42)?;

        // Warmup
        black_box(run_cohort(&cohort));

        let dur = median_time(|| {
            black_box(run_cohort(&cohort));
        });
        results.push((n, dur));
    }
    Ok(results)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("IWL Cohort Benchmarks");
    println!("============================================================");
    println!("{:>10}   {:>12}   {:>14}", "Patients", "Median (ms)", "ns / patient");
    println!("--------------------------------------------");

    for (n, dur) in bench_cohort(&[1_000, 10_000, 100_000, 1_000_000])? {
        let ms = dur.as_secs_f64() * 1000.0;
        let per = dur.as_nanos() as f64 / n as f64;
        println!("{:>10}      {:>8.2}      {:>10.1}", n, ms, per);
    }

    println!("============================================================");
    Ok(())
}
