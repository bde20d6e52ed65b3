use std::fmt;
use std::num::NonZero;

use new_zealand::nz;

/// How a fixed amount of work is divided between threads: `threads` workers each invoke the
/// workload `runs_per_thread` times.
///
/// # Examples
///
/// ```
/// use new_zealand::nz;
/// use thread_scaling::ScalingConfig;
///
/// let config = ScalingConfig::new(nz!(4), nz!(4));
///
/// assert_eq!(config.total_invocations(), 16);
/// assert_eq!(config.output_file_name(), "f_4_4.csv");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ScalingConfig {
    threads: NonZero<usize>,
    runs_per_thread: NonZero<usize>,
}

/// The configurations exercised by [`run_scaling_test()`][crate::run_scaling_test], each
/// invoking the workload 16 times in total.
pub const STANDARD_CONFIGS: [ScalingConfig; 4] = [
    ScalingConfig::new(nz!(1), nz!(16)),
    ScalingConfig::new(nz!(2), nz!(8)),
    ScalingConfig::new(nz!(4), nz!(4)),
    ScalingConfig::new(nz!(8), nz!(2)),
];

impl ScalingConfig {
    /// Creates a configuration of `threads` workers, each invoking the workload
    /// `runs_per_thread` times.
    #[must_use]
    pub const fn new(threads: NonZero<usize>, runs_per_thread: NonZero<usize>) -> Self {
        Self {
            threads,
            runs_per_thread,
        }
    }

    /// Number of worker threads.
    #[must_use]
    pub fn threads(&self) -> NonZero<usize> {
        self.threads
    }

    /// Number of workload invocations each worker performs.
    #[must_use]
    pub fn runs_per_thread(&self) -> NonZero<usize> {
        self.runs_per_thread
    }

    /// Number of workload invocations across all workers.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `usize`.
    #[must_use]
    pub fn total_invocations(&self) -> usize {
        self.threads
            .get()
            .checked_mul(self.runs_per_thread.get())
            .expect("thread and run counts large enough to overflow usize are not realistic")
    }

    /// Name of the CSV file that receives the run records of this configuration.
    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("f_{}_{}.csv", self.threads, self.runs_per_thread)
    }
}

impl fmt::Display for ScalingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thread_noun = if self.threads.get() == 1 {
            "thread"
        } else {
            "threads"
        };

        write!(
            f,
            "{} {thread_noun} and {} runs",
            self.threads, self.runs_per_thread
        )
    }
}
