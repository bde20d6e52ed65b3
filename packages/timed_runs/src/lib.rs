#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Times repeated invocations of a function and reports how long they took.
//!
//! A [`Benchmark`] executes a function a configurable number of warmup times followed by a
//! configurable number of measured times, timing each execution with a monotonic clock. It then
//! prints a small table with the mean and variance of each phase and, optionally, saves every
//! individual timing to a CSV file for further analysis.
//!
//! The core functionality includes:
//! - [`Benchmark`] - Configures and executes the timed runs
//! - [`Runs`] - Lazily executes the runs, yielding one [`RunRecord`] per execution
//! - [`Report`] - All run records plus the [`PhaseStatistics`] of each phase
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # Simple usage
//!
//! ```
//! use timed_runs::Benchmark;
//!
//! fn collatz_steps(mut n: u64) -> u32 {
//!     let mut steps = 0;
//!     while n != 1 {
//!         n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
//!         steps += 1;
//!     }
//!     steps
//! }
//!
//! // Prints one progress line per run, then:
//! //      is_warmup        rounds          mean      variance
//! //          False            10  3.2159e-06 1.1473451e-13
//! let report = Benchmark::new()
//!     .warmups(1)
//!     .iterations(10)
//!     .verbose(true)
//!     .execute(|| collatz_steps(837_799))
//!     .unwrap();
//!
//! assert_eq!(report.records().len(), 11);
//! ```
//!
//! # Phases
//!
//! Warmup runs are timed and recorded exactly like measured runs but are summarized separately.
//! Run numbering restarts at 1 for the measured phase. Variance is only defined for two or more
//! samples, so a phase with fewer runs is left out of the results table.
//!
//! # Output file
//!
//! When an output path is configured, all run records are written to it after the last run,
//! replacing any existing file:
//!
//! ```text
//! run num,is warmup,timing
//! 1,True,0.0021
//! 1,False,0.0019
//! 2,False,0.0020
//! ```
//!
//! # Failures
//!
//! The benchmark is transparent to panics in the measured function: they unwind out of
//! [`Benchmark::execute()`] and the remaining runs are abandoned, with no table printed and no
//! output file written.

mod benchmark;
mod csv_file;
mod error;
mod format;
mod pal;
mod record;
mod report;
mod runs;
mod stats;

pub use benchmark::*;
pub use csv_file::*;
pub use error::*;
pub use format::{SIGNIFICANT_DIGITS, format_significant};
pub use record::*;
pub use report::*;
pub use runs::*;
pub use stats::*;
