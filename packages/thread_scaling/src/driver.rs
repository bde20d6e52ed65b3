use std::io::Write;
use std::path::Path;

use timed_runs::{Benchmark, Error, Report, Result};
use tracing::{debug, info};

use crate::{STANDARD_CONFIGS, ScalingConfig, run_threaded};

/// Times `f` under each of the [`STANDARD_CONFIGS`], writing progress and results to `out`.
///
/// For every configuration this prints a banner naming the workload and the configuration, then
/// executes `test_iterations` measured runs (no warmup) where each run is a full
/// [`run_threaded()`] fan-out of 16 workload invocations. Every run is reported as it completes
/// and the per-run timings are saved to `output_dir`, in a file named after the configuration.
///
/// Returns one report per configuration, in the order they were executed.
///
/// # Errors
///
/// Returns an error if a results file cannot be written or `out` is not writable. Configurations
/// after the failing one are not executed.
///
/// # Panics
///
/// Panics if `f` panics.
pub fn run_scaling_test<F, R>(
    workload_name: &str,
    f: F,
    test_iterations: u64,
    output_dir: &Path,
    out: &mut impl Write,
) -> Result<Vec<Report>>
where
    F: Fn() -> R + Sync,
{
    run_configs(
        &STANDARD_CONFIGS,
        workload_name,
        f,
        test_iterations,
        output_dir,
        out,
    )
}

/// Like [`run_scaling_test()`] but with a custom set of configurations.
///
/// # Errors
///
/// Returns an error if a results file cannot be written or `out` is not writable.
///
/// # Panics
///
/// Panics if `f` panics.
pub fn run_configs<F, R>(
    configs: &[ScalingConfig],
    workload_name: &str,
    f: F,
    test_iterations: u64,
    output_dir: &Path,
    out: &mut impl Write,
) -> Result<Vec<Report>>
where
    F: Fn() -> R + Sync,
{
    info!(
        workload_name,
        configurations = configs.len(),
        test_iterations,
        "starting thread scaling test"
    );

    let mut reports = Vec::with_capacity(configs.len());

    for &config in configs {
        writeln!(out, "Testing the function {workload_name} with {config}.").map_err(Error::Output)?;

        let output_path = output_dir.join(config.output_file_name());

        debug!(%config, output_path = %output_path.display(), "timing configuration");

        let report = Benchmark::new()
            .warmups(0)
            .iterations(test_iterations)
            .verbose(true)
            .output_path(output_path)
            .execute_to(out, || run_threaded(config, &f))?;

        reports.push(report);
    }

    Ok(reports)
}
