use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::format::COLUMN_WIDTH;
use crate::pal::PlatformFacade;
use crate::{
    Error, Phase, Report, Result, RunRecord, Runs, SIGNIFICANT_DIGITS, csv_file, format_significant,
};

/// Configuration of a benchmark: how many times to execute the benchmarked function and what to
/// do with the timings.
///
/// The defaults are no warmup runs, a single measured run, no per-run progress output and no
/// output file.
///
/// # Examples
///
/// ```
/// use timed_runs::Benchmark;
///
/// let report = Benchmark::new()
///     .warmups(2)
///     .iterations(5)
///     .verbose(true)
///     .execute(|| (0..10_000_u64).sum::<u64>())
///     .unwrap();
///
/// assert_eq!(report.records().len(), 7);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Benchmark {
    warmups: u64,
    iterations: u64,
    verbose: bool,
    output_path: Option<PathBuf>,

    platform: PlatformFacade,
}

impl Benchmark {
    /// Creates a benchmark with the default configuration.
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            warmups: 0,
            iterations: 1,
            verbose: false,
            output_path: None,
            platform,
        }
    }

    /// Sets how many warmup runs to execute before the measured runs.
    pub fn warmups(mut self, warmups: u64) -> Self {
        self.warmups = warmups;
        self
    }

    /// Sets how many measured runs to execute.
    ///
    /// Zero is accepted but produces no measured statistics.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets whether a progress line is printed after every run.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the path of a CSV file that receives every run record once all runs complete.
    ///
    /// Any existing file at the path is replaced.
    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// How many warmup runs are executed before the measured runs.
    #[must_use]
    pub fn warmup_count(&self) -> u64 {
        self.warmups
    }

    /// How many measured runs are executed.
    #[must_use]
    pub fn iteration_count(&self) -> u64 {
        self.iterations
    }

    /// Whether a progress line is printed after every run.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The CSV file that receives the run records, if any.
    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// How many runs the given phase consists of.
    #[must_use]
    pub fn phase_count(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Warmup => self.warmups,
            Phase::Measured => self.iterations,
        }
    }

    /// Returns the runs of this benchmark as a lazy sequence of run records.
    ///
    /// Nothing is printed or saved; this is the raw material that
    /// [`execute()`][Self::execute] builds its report from.
    pub fn runs<'a, F, R>(&'a self, f: &'a mut F) -> Runs<'a, F>
    where
        F: FnMut() -> R,
    {
        Runs::new(f, &self.platform, self.warmups, self.iterations)
    }

    /// Executes the benchmark, printing progress and the results table to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be written or stdout is not writable.
    /// Panics in `f` are not caught and abandon the remaining runs.
    pub fn execute<F, R>(&self, f: F) -> Result<Report>
    where
        F: FnMut() -> R,
    {
        // Stdout is only locked for the duration of each write, so `f` remains free to print
        // from any thread it starts and waits for.
        self.execute_to(&mut io::stdout(), f)
    }

    /// Executes the benchmark, printing progress and the results table to `out`.
    ///
    /// Progress lines (in verbose mode) are written as each run completes. The output file, if
    /// any, is written after all runs complete, followed by the results table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file or `out` cannot be written to.
    /// Panics in `f` are not caught and abandon the remaining runs.
    pub fn execute_to<W, F, R>(&self, out: &mut W, mut f: F) -> Result<Report>
    where
        W: Write,
        F: FnMut() -> R,
    {
        debug!(
            warmups = self.warmups,
            iterations = self.iterations,
            verbose = self.verbose,
            output_path = ?self.output_path,
            "benchmark starting"
        );

        // Not preallocated: the configured run count may be far larger than memory allows.
        let mut records = Vec::new();

        for record in self.runs(&mut f) {
            if self.verbose {
                self.write_progress_line(out, &record)?;
            }

            records.push(record);
        }

        if let Some(path) = &self.output_path {
            csv_file::save_csv(path, &records)?;
        }

        let report = Report::new(records);

        write!(out, "{report}").map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;

        debug!(
            runs = report.records().len(),
            phases_with_statistics = report.statistics().len(),
            "benchmark finished"
        );

        Ok(report)
    }

    /// Turns `f` into a zero-argument function that executes this benchmark on every call.
    ///
    /// Bind any arguments of the benchmarked function in the closure passed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use timed_runs::Benchmark;
    ///
    /// fn checksum(data: &[u8]) -> u32 {
    ///     data.iter().map(|&b| u32::from(b)).sum()
    /// }
    ///
    /// let data = vec![7_u8; 4096];
    /// let mut timed_checksum = Benchmark::new().iterations(3).wrap(|| checksum(&data));
    ///
    /// let report = timed_checksum().unwrap();
    /// assert_eq!(report.records().len(), 3);
    /// ```
    pub fn wrap<F, R>(self, mut f: F) -> impl FnMut() -> Result<Report>
    where
        F: FnMut() -> R,
    {
        move || self.execute(&mut f)
    }

    fn write_progress_line(&self, out: &mut impl Write, record: &RunRecord) -> Result<()> {
        let timing = format_significant(record.duration_seconds(), SIGNIFICANT_DIGITS);

        writeln!(
            out,
            "{} {}/{}: {timing:>COLUMN_WIDTH$} s",
            record.phase().title(),
            record.sequence_number(),
            self.phase_count(record.phase()),
        )
        .map_err(Error::Output)
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}
