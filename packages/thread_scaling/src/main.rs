#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point that times a recursive Fibonacci workload under each thread configuration.
//!
//! This module is excluded from mutation testing because it only wires up logging and arguments
//! around the library, which is tested on its own.

use std::hint::black_box;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use argh::FromArgs;
use thread_scaling::{DEFAULT_FIB_N, fib, run_scaling_test};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Times a recursive Fibonacci calculation spread over 1, 2, 4 and 8 threads.
#[derive(FromArgs)]
struct Args {
    /// number of timed runs per thread configuration
    #[argh(option, default = "2")]
    iterations: u64,

    /// which Fibonacci number each workload invocation calculates
    #[argh(option, default = "DEFAULT_FIB_N")]
    fib_n: u32,

    /// directory that receives the CSV file of each thread configuration
    #[argh(option, default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    // Diagnostics go to stderr so they never interleave with the results on stdout.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    match thread::available_parallelism() {
        Ok(processors) => info!(processors = processors.get(), "detected available parallelism"),
        Err(e) => info!(error = %e, "available parallelism is unknown"),
    }

    let fib_n = args.fib_n;
    let mut stdout = io::stdout();

    match run_scaling_test(
        "fib",
        || fib(black_box(fib_n)),
        args.iterations,
        &args.output_dir,
        &mut stdout,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
