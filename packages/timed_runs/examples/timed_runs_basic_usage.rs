//! Example that times a function with warmup runs, verbose progress and a results file.
//!
//! The run records end up in `timed_runs_basic_usage.csv` in the system temporary directory.

use std::env;
use std::hint::black_box;

use timed_runs::{Benchmark, Phase, load_csv};

fn sum_of_squares(limit: u64) -> u64 {
    (1..=limit)
        .map(|n| n.wrapping_mul(n))
        .fold(0, u64::wrapping_add)
}

fn main() {
    let output_path = env::temp_dir().join("timed_runs_basic_usage.csv");

    let mut timed_sum = Benchmark::new()
        .warmups(2)
        .iterations(5)
        .verbose(true)
        .output_path(&output_path)
        .wrap(|| sum_of_squares(black_box(100_000)));

    let report = timed_sum().unwrap();

    let measured = report.phase_statistics(Phase::Measured).unwrap();
    println!(
        "Measured mean of {} rounds: {:.9} s",
        measured.rounds(),
        measured.mean()
    );

    let saved = load_csv(&output_path).unwrap();
    println!("Saved {} run records to {}", saved.len(), output_path.display());
}
