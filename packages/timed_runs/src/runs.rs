use std::hint::black_box;
use std::iter::FusedIterator;
use std::num::NonZero;

use tracing::trace;

use crate::pal::{Platform, PlatformFacade};
use crate::{Phase, RunRecord};

/// Lazily executes and times the runs of a benchmark, yielding one [`RunRecord`] per run.
///
/// Every call to [`next()`][Iterator::next] executes the benchmarked function exactly once.
/// All warmup runs come before all measured runs. The sequence cannot be restarted; create a new
/// one via [`Benchmark::runs()`][crate::Benchmark::runs] to execute the runs again.
///
/// Return values of the function are discarded.
///
/// [`len()`][ExactSizeIterator::len] is only meaningful while the number of remaining runs fits
/// in `usize`. Above that, [`size_hint()`][Iterator::size_hint] reports no upper bound.
#[derive(derive_more::Debug)]
#[must_use = "runs are only executed when the iterator is advanced"]
pub struct Runs<'a, F> {
    #[debug(ignore)]
    f: &'a mut F,

    platform: &'a PlatformFacade,

    warmups: u64,
    iterations: u64,

    // How many runs have already been executed, across both phases.
    completed: u64,
}

impl<'a, F> Runs<'a, F> {
    pub(crate) fn new(
        f: &'a mut F,
        platform: &'a PlatformFacade,
        warmups: u64,
        iterations: u64,
    ) -> Self {
        Self {
            f,
            platform,
            warmups,
            iterations,
            completed: 0,
        }
    }

    fn remaining(&self) -> u64 {
        self.warmups
            .saturating_add(self.iterations)
            .saturating_sub(self.completed)
    }
}

impl<F, R> Iterator for Runs<'_, F>
where
    F: FnMut() -> R,
{
    type Item = RunRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let (phase, index_in_phase) = if self.completed < self.warmups {
            (Phase::Warmup, self.completed)
        } else {
            (Phase::Measured, self.completed.saturating_sub(self.warmups))
        };

        let sequence_number = NonZero::new(index_in_phase.saturating_add(1))
            .expect("adding 1 to an index that is far below u64::MAX is never zero");

        let start = self.platform.now();
        black_box((self.f)());
        let end = self.platform.now();

        self.completed = self.completed.saturating_add(1);

        // The clock is monotonic, so this only saturates if the platform misbehaves.
        let duration = end.saturating_sub(start);

        trace!(%phase, sequence_number = sequence_number.get(), ?duration, "run completed");

        Some(RunRecord::new(sequence_number, phase, duration))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<F, R> ExactSizeIterator for Runs<'_, F> where F: FnMut() -> R {}

impl<F, R> FusedIterator for Runs<'_, F> where F: FnMut() -> R {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::pal::FakePlatform;

    #[test]
    fn executes_lazily() {
        let platform = PlatformFacade::fake(FakePlatform::new());
        let calls = Cell::new(0_u32);
        let mut f = || calls.set(calls.get() + 1);

        let mut runs = Runs::new(&mut f, &platform, 1, 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(runs.len(), 3);

        runs.next().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(runs.len(), 2);

        assert_eq!(runs.by_ref().count(), 2);
        assert_eq!(calls.get(), 3);
        assert!(runs.next().is_none());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn numbers_each_phase_from_one() {
        let platform = PlatformFacade::fake(FakePlatform::new());
        let mut f = || {};

        let numbering = Runs::new(&mut f, &platform, 2, 3)
            .map(|record| (record.phase(), record.sequence_number().get()))
            .collect::<Vec<_>>();

        assert_eq!(
            numbering,
            [
                (Phase::Warmup, 1),
                (Phase::Warmup, 2),
                (Phase::Measured, 1),
                (Phase::Measured, 2),
                (Phase::Measured, 3),
            ]
        );
    }

    #[test]
    fn times_only_the_function() {
        let fake = FakePlatform::new();
        let platform = PlatformFacade::fake(fake.clone());

        let step = Cell::new(1_u64);
        let mut f = || {
            fake.advance(Duration::from_millis(step.get()));
            step.set(step.get() * 10);
        };

        let durations = Runs::new(&mut f, &platform, 0, 3)
            .map(|record| {
                // Time passing between runs must not be attributed to any run.
                fake.advance(Duration::from_secs(5));
                record.duration()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            durations,
            [
                Duration::from_millis(1),
                Duration::from_millis(10),
                Duration::from_millis(100)
            ]
        );
    }

    #[test]
    fn no_runs_requested() {
        let platform = PlatformFacade::fake(FakePlatform::new());
        let calls = Cell::new(0_u32);
        let mut f = || calls.set(calls.get() + 1);

        let mut runs = Runs::new(&mut f, &platform, 0, 0);

        assert_eq!(runs.len(), 0);
        assert!(runs.next().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn size_hint_matches_remaining_runs() {
        let platform = PlatformFacade::fake(FakePlatform::new());
        let mut f = || {};

        let mut runs = Runs::new(&mut f, &platform, 2, 1);
        assert_eq!(runs.size_hint(), (3, Some(3)));

        runs.next().unwrap();
        assert_eq!(runs.size_hint(), (2, Some(2)));

        let mut g = || {};
        let huge = Runs::new(&mut g, &platform, u64::MAX, u64::MAX);
        let (lower, upper) = huge.size_hint();

        match usize::try_from(u64::MAX) {
            Ok(max) => assert_eq!((lower, upper), (max, Some(max))),
            Err(_) => assert_eq!((lower, upper), (usize::MAX, None)),
        }
    }

    #[test]
    #[should_panic(expected = "workload failure")]
    fn function_panics_propagate() {
        let platform = PlatformFacade::fake(FakePlatform::new());
        let calls = Cell::new(0_u32);
        let mut f = || {
            calls.set(calls.get() + 1);
            assert!(calls.get() < 2, "workload failure");
        };

        let _completed = Runs::new(&mut f, &platform, 0, 3).count();
    }
}
