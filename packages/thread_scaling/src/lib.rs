#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Measures how a CPU-bound workload scales when a fixed amount of work is spread over more
//! threads.
//!
//! Each [`ScalingConfig`] divides 16 invocations of the workload between a number of worker
//! threads. [`run_scaling_test()`] times every one of the [`STANDARD_CONFIGS`] with
//! [`timed_runs::Benchmark`], printing progress and a results table per configuration and saving
//! the individual timings to one CSV file per configuration.
//!
//! Worker threads are native operating system threads, so a CPU-bound workload is expected to
//! finish faster with more threads, up to the number of available processors.
//!
//! # Example
//!
//! ```
//! use thread_scaling::{fib, run_scaling_test};
//!
//! let output_dir = tempfile::tempdir().unwrap();
//! let mut out = Vec::new();
//!
//! let reports = run_scaling_test("fib", || fib(15), 2, output_dir.path(), &mut out).unwrap();
//!
//! assert_eq!(reports.len(), 4);
//! assert!(output_dir.path().join("f_8_2.csv").exists());
//! ```

mod config;
mod driver;
mod fib;
mod threaded;

pub use config::*;
pub use driver::*;
pub use fib::*;
pub use threaded::*;
