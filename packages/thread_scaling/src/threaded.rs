use std::hint::black_box;
use std::thread;

use tracing::trace;

use crate::ScalingConfig;

/// Invokes `f` on `config.threads()` freshly spawned worker threads, each calling it
/// `config.runs_per_thread()` times in a row, and returns once every worker has finished.
///
/// The workers share nothing but `f` itself, which they only read. Return values of `f` are
/// discarded.
///
/// # Panics
///
/// Panics if a worker thread cannot be spawned or if `f` panics on any worker. In the latter
/// case all other workers still run to completion first.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use new_zealand::nz;
/// use thread_scaling::{ScalingConfig, run_threaded};
///
/// let invocations = AtomicUsize::new(0);
///
/// run_threaded(ScalingConfig::new(nz!(2), nz!(8)), &|| {
///     invocations.fetch_add(1, Ordering::Relaxed);
/// });
///
/// assert_eq!(invocations.load(Ordering::Relaxed), 16);
/// ```
pub fn run_threaded<F, R>(config: ScalingConfig, f: &F)
where
    F: Fn() -> R + Sync,
{
    let runs_per_thread = config.runs_per_thread().get();

    thread::scope(|scope| {
        for worker_index in 0..config.threads().get() {
            thread::Builder::new()
                .name(format!("scaling-worker-{worker_index}"))
                .spawn_scoped(scope, move || {
                    trace!(worker_index, runs_per_thread, "worker started");

                    for _ in 0..runs_per_thread {
                        black_box(f());
                    }
                })
                .expect("failed to spawn worker thread: thread spawning failure is not supported");
        }
    });
}
