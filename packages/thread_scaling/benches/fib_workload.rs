//! Benchmarks the Fibonacci workload on its own and fanned out over each thread configuration.
//!
//! Comparing the threaded variants against each other shows the same scaling behavior as the
//! `thread_scaling` binary, with criterion's statistics in place of the simple results table.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use thread_scaling::{STANDARD_CONFIGS, fib, run_threaded};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

// Small enough that a full fan-out of 16 invocations takes milliseconds, not seconds.
const FIB_N: u32 = 20;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_workload");

    group.bench_function("single_invocation", |b| {
        b.iter(|| fib(black_box(FIB_N)));
    });

    for config in STANDARD_CONFIGS {
        group.bench_function(
            format!("threads_{}_runs_{}", config.threads(), config.runs_per_thread()),
            |b| {
                b.iter(|| run_threaded(config, &|| fib(black_box(FIB_N))));
            },
        );
    }

    group.finish();
}
