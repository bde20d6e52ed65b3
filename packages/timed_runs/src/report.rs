//! Results of a benchmark invocation.

use std::fmt;

use crate::format::COLUMN_WIDTH;
use crate::{Phase, PhaseStatistics, RunRecord, SIGNIFICANT_DIGITS, format_significant};

/// The outcome of one benchmark invocation: every run record plus the statistics of each phase
/// that had enough runs to calculate them.
///
/// The [`Display`][fmt::Display] form is the results table printed by
/// [`Benchmark::execute()`][crate::Benchmark::execute]: a header row followed by one row per
/// phase with at least two runs.
///
/// # Examples
///
/// ```
/// use timed_runs::{Benchmark, Phase};
///
/// let report = Benchmark::new()
///     .warmups(1)
///     .iterations(4)
///     .execute(|| std::hint::black_box(3_u64.pow(20)))
///     .unwrap();
///
/// // One warmup run is not enough for statistics, so only the measured phase has a row.
/// assert!(report.phase_statistics(Phase::Warmup).is_none());
/// assert_eq!(report.phase_statistics(Phase::Measured).unwrap().rounds(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    records: Vec<RunRecord>,
    statistics: Vec<PhaseStatistics>,
}

impl Report {
    /// Creates a report from records in execution order.
    #[must_use]
    pub fn new(records: Vec<RunRecord>) -> Self {
        let statistics = Phase::ALL
            .into_iter()
            .filter_map(|phase| PhaseStatistics::from_records(phase, &records))
            .collect();

        Self {
            records,
            statistics,
        }
    }

    /// All run records, warmup and measured, in execution order.
    #[must_use]
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// The records of a single phase, in execution order.
    pub fn phase_records(&self, phase: Phase) -> impl Iterator<Item = &RunRecord> {
        self.records
            .iter()
            .filter(move |record| record.phase() == phase)
    }

    /// Statistics of every phase with at least two runs, warmup phase first.
    #[must_use]
    pub fn statistics(&self) -> &[PhaseStatistics] {
        &self.statistics
    }

    /// Statistics of the given phase, if it had at least two runs.
    #[must_use]
    pub fn phase_statistics(&self, phase: Phase) -> Option<&PhaseStatistics> {
        self.statistics.iter().find(|stats| stats.phase() == phase)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            "is_warmup", "rounds", "mean", "variance"
        )?;

        for stats in &self.statistics {
            writeln!(
                f,
                "{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
                stats.phase().flag(),
                stats.rounds(),
                format_significant(stats.mean(), SIGNIFICANT_DIGITS),
                format_significant(stats.variance(), SIGNIFICANT_DIGITS),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;
    use std::time::Duration;

    use super::*;

    fn record(sequence_number: u64, phase: Phase, millis: u64) -> RunRecord {
        RunRecord::new(
            NonZero::new(sequence_number).unwrap(),
            phase,
            Duration::from_millis(millis),
        )
    }

    #[test]
    fn empty_report_prints_header_only() {
        let report = Report::new(Vec::new());

        assert!(report.records().is_empty());
        assert!(report.statistics().is_empty());
        assert_eq!(
            report.to_string(),
            "     is_warmup        rounds          mean      variance\n"
        );
    }

    #[test]
    fn table_rows_follow_phase_order() {
        let report = Report::new(vec![
            record(1, Phase::Warmup, 1000),
            record(2, Phase::Warmup, 3000),
            record(1, Phase::Measured, 1500),
            record(2, Phase::Measured, 1500),
        ]);

        assert_eq!(
            report.to_string(),
            "     is_warmup        rounds          mean      variance\n\
             \x20         True             2           2.0           2.0\n\
             \x20        False             2           1.5           0.0\n"
        );
    }

    #[test]
    fn phase_with_single_run_has_no_row() {
        let report = Report::new(vec![
            record(1, Phase::Warmup, 1000),
            record(1, Phase::Measured, 1000),
            record(2, Phase::Measured, 2000),
            record(3, Phase::Measured, 3000),
        ]);

        assert_eq!(report.statistics().len(), 1);
        assert!(report.phase_statistics(Phase::Warmup).is_none());
        assert_eq!(report.to_string().lines().count(), 2);
    }

    #[test]
    fn phase_records_filter_by_phase() {
        let report = Report::new(vec![
            record(1, Phase::Warmup, 10),
            record(1, Phase::Measured, 20),
            record(2, Phase::Measured, 30),
        ]);

        let measured = report
            .phase_records(Phase::Measured)
            .map(|record| record.sequence_number().get())
            .collect::<Vec<_>>();

        assert_eq!(measured, [1, 2]);
        assert_eq!(report.phase_records(Phase::Warmup).count(), 1);
    }
}
