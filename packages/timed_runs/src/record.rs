use std::num::NonZero;
use std::time::Duration;

/// Which group of executions a run belongs to.
///
/// Warmup runs are timed and recorded like any other run but are reported separately from the
/// measured runs, so that one-off costs (cold caches, lazy initialization) do not skew the
/// statistics of the measured phase.
#[derive(Clone, Copy, Debug, derive_more::Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[allow(
    clippy::exhaustive_enums,
    reason = "a benchmark invocation only ever has a warmup phase and a measured phase"
)]
pub enum Phase {
    /// Runs executed before the measured runs.
    #[display("warmup")]
    Warmup,

    /// Runs whose timings are the subject of the benchmark.
    #[display("measured")]
    Measured,
}

impl Phase {
    /// Both phases, in execution order.
    pub const ALL: [Self; 2] = [Self::Warmup, Self::Measured];

    /// Whether this is the warmup phase.
    #[must_use]
    pub fn is_warmup(self) -> bool {
        matches!(self, Self::Warmup)
    }

    /// The title used when printing the progress of individual runs of this phase.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Warmup => "Warmup round",
            Self::Measured => "Execution round",
        }
    }

    /// The "is warmup" flag as it appears in CSV files and the results table.
    pub(crate) fn flag(self) -> &'static str {
        if self.is_warmup() { "True" } else { "False" }
    }
}

/// One timed execution of a benchmarked function.
///
/// Sequence numbers start at 1 and are assigned independently within each phase, so the first
/// measured run is number 1 even if warmup runs preceded it.
///
/// # Examples
///
/// ```
/// use timed_runs::{Benchmark, Phase};
///
/// let benchmark = Benchmark::new().warmups(1).iterations(2);
///
/// let mut work = || std::hint::black_box(21 * 2);
/// let phases: Vec<_> = benchmark
///     .runs(&mut work)
///     .map(|record| (record.phase(), record.sequence_number().get()))
///     .collect();
///
/// assert_eq!(
///     phases,
///     [(Phase::Warmup, 1), (Phase::Measured, 1), (Phase::Measured, 2)]
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunRecord {
    sequence_number: NonZero<u64>,
    phase: Phase,
    duration: Duration,
}

impl RunRecord {
    pub(crate) fn new(sequence_number: NonZero<u64>, phase: Phase, duration: Duration) -> Self {
        Self {
            sequence_number,
            phase,
            duration,
        }
    }

    /// Position of the run within its phase, starting from 1.
    #[must_use]
    pub fn sequence_number(&self) -> NonZero<u64> {
        self.sequence_number
    }

    /// The phase the run belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the run belongs to the warmup phase.
    #[must_use]
    pub fn is_warmup(&self) -> bool {
        self.phase.is_warmup()
    }

    /// Wall-clock time the benchmarked function took to execute.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Wall-clock time the benchmarked function took to execute, in seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn phase_flags() {
        assert_eq!(Phase::Warmup.flag(), "True");
        assert_eq!(Phase::Measured.flag(), "False");
        assert!(Phase::Warmup.is_warmup());
        assert!(!Phase::Measured.is_warmup());
    }

    #[test]
    fn phase_titles() {
        assert_eq!(Phase::Warmup.title(), "Warmup round");
        assert_eq!(Phase::Measured.title(), "Execution round");
    }

    #[test]
    fn phases_in_execution_order() {
        assert!(Phase::Warmup < Phase::Measured);
        assert_eq!(Phase::ALL, [Phase::Warmup, Phase::Measured]);
    }

    #[test]
    fn record_accessors() {
        let record = RunRecord::new(nz!(3), Phase::Warmup, Duration::from_millis(1500));

        assert_eq!(record.sequence_number().get(), 3);
        assert_eq!(record.phase(), Phase::Warmup);
        assert!(record.is_warmup());
        assert_eq!(record.duration(), Duration::from_millis(1500));
        assert!((record.duration_seconds() - 1.5).abs() < f64::EPSILON);
    }
}
