use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running a benchmark or handling its run records.
///
/// Panics raised by the benchmarked function itself are not represented here. They unwind
/// through the benchmark unchanged, abandoning any remaining runs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The run records could not be written to the requested output file.
    #[error("failed to write run records to '{}'", path.display())]
    WriteRecords {
        /// The output file the records were destined for.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A run records file could not be read.
    #[error("failed to read run records from '{}'", path.display())]
    ReadRecords {
        /// The file that was being read.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A run records file did not match the expected format.
    #[error("invalid run records on line {line}: {problem}")]
    ParseRecords {
        /// The 1-based line number of the offending line.
        line: usize,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// Progress lines or the results table could not be written to the console output.
    #[error("failed to write benchmark output")]
    Output(#[source] io::Error),
}

/// A specialized `Result` type for benchmark operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
