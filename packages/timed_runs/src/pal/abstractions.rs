//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides the monotonic clock that brackets each timed run.
///
/// The returned value is the time elapsed since an arbitrary origin fixed when the platform was
/// created. Only differences between two readings are meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the monotonic clock.
    fn now(&self) -> Duration;
}
