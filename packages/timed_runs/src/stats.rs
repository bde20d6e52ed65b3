//! Summary statistics over the run durations of a phase.

use crate::{Phase, RunRecord};

/// Arithmetic mean of the samples.
///
/// # Panics
///
/// Panics if `samples` is empty.
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    assert!(!samples.is_empty(), "mean requires at least one sample");

    samples.iter().sum::<f64>() / sample_count(samples)
}

/// Sample variance (with Bessel's correction) of the samples.
///
/// Variance is undefined for fewer than two samples. Calling this with fewer is a bug in the
/// caller; the reporting logic in this crate never does so and instead omits the phase.
///
/// # Panics
///
/// Panics if `samples` has fewer than two elements.
#[must_use]
pub fn sample_variance(samples: &[f64]) -> f64 {
    assert!(
        samples.len() >= 2,
        "sample variance requires at least two samples, got {}",
        samples.len()
    );

    let mean = mean(samples);

    let sum_of_squares: f64 = samples
        .iter()
        .map(|sample| {
            let deviation = sample - mean;
            deviation * deviation
        })
        .sum();

    sum_of_squares / (sample_count(samples) - 1.0)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "sample counts never come anywhere near 2^52"
)]
fn sample_count(samples: &[f64]) -> f64 {
    samples.len() as f64
}

/// Mean and variance of the run durations in one phase of a benchmark invocation.
///
/// Only exists for phases with at least two runs, as variance is not defined for fewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseStatistics {
    phase: Phase,
    rounds: usize,
    mean: f64,
    variance: f64,
}

impl PhaseStatistics {
    /// Calculates the statistics of the records that belong to `phase`, ignoring all others.
    ///
    /// Returns `None` if fewer than two records belong to the phase.
    ///
    /// # Examples
    ///
    /// ```
    /// use timed_runs::{Benchmark, Phase, PhaseStatistics};
    ///
    /// let benchmark = Benchmark::new().warmups(1).iterations(3);
    ///
    /// let mut work = || std::hint::black_box(6 * 7);
    /// let records: Vec<_> = benchmark.runs(&mut work).collect();
    ///
    /// // A single warmup run has a mean but no variance, so no statistics.
    /// assert!(PhaseStatistics::from_records(Phase::Warmup, &records).is_none());
    ///
    /// let measured = PhaseStatistics::from_records(Phase::Measured, &records).unwrap();
    /// assert_eq!(measured.rounds(), 3);
    /// ```
    #[must_use]
    pub fn from_records(phase: Phase, records: &[RunRecord]) -> Option<Self> {
        let samples = records
            .iter()
            .filter(|record| record.phase() == phase)
            .map(RunRecord::duration_seconds)
            .collect::<Vec<_>>();

        if samples.len() < 2 {
            return None;
        }

        Some(Self {
            phase,
            rounds: samples.len(),
            mean: mean(&samples),
            variance: sample_variance(&samples),
        })
    }

    /// The phase these statistics describe.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How many runs the phase contained.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Mean run duration, in seconds.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance of the run durations, in seconds squared.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.variance
    }
}
