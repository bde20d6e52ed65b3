//! Persistence of run records as comma-separated text.
//!
//! The format is a header row followed by one row per run, in execution order:
//!
//! ```text
//! run num,is warmup,timing
//! 1,True,0.0123
//! 1,False,0.0119
//! 2,False,0.0121
//! ```
//!
//! Timings are in seconds, written in the shortest form that parses back to the same `f64`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::num::NonZero;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::{Error, Phase, Result, RunRecord};

/// The first line of every run records file.
pub const CSV_HEADER: &str = "run num,is warmup,timing";

/// Writes the header and one row per record to `writer`.
///
/// # Errors
///
/// Returns any error reported by the writer.
pub fn write_csv(writer: &mut impl Write, records: &[RunRecord]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;

    for record in records {
        writeln!(
            writer,
            "{},{},{}",
            record.sequence_number(),
            record.phase().flag(),
            record.duration_seconds()
        )?;
    }

    Ok(())
}

/// Saves the records to a file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::WriteRecords`] if the file cannot be created or written.
pub fn save_csv(path: &Path, records: &[RunRecord]) -> Result<()> {
    let map_err = |source: io::Error| Error::WriteRecords {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(map_err)?);
    write_csv(&mut writer, records).map_err(map_err)?;
    writer.flush().map_err(map_err)?;

    debug!(path = %path.display(), records = records.len(), "saved run records");

    Ok(())
}

/// Loads records previously saved with [`save_csv()`].
///
/// # Errors
///
/// Returns [`Error::ReadRecords`] if the file cannot be read and [`Error::ParseRecords`] if its
/// contents are not a valid run records file.
pub fn load_csv(path: &Path) -> Result<Vec<RunRecord>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadRecords {
        path: path.to_path_buf(),
        source,
    })?;

    parse_csv(&text)
}

/// Parses the text of a run records file.
///
/// # Errors
///
/// Returns [`Error::ParseRecords`] if the header is missing or any row is malformed.
pub fn parse_csv(text: &str) -> Result<Vec<RunRecord>> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, CSV_HEADER)) => {}
        Some((_, other)) => {
            return Err(Error::ParseRecords {
                line: 1,
                problem: format!("expected header '{CSV_HEADER}', found '{other}'"),
            });
        }
        None => {
            return Err(Error::ParseRecords {
                line: 1,
                problem: "file is empty".to_string(),
            });
        }
    }

    lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            parse_row(line).map_err(|problem| Error::ParseRecords {
                line: index.saturating_add(1),
                problem,
            })
        })
        .collect()
}

fn parse_row(line: &str) -> std::result::Result<RunRecord, String> {
    let fields = line.split(',').collect::<Vec<_>>();

    let [sequence_number, flag, timing] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let sequence_number = sequence_number
        .parse::<NonZero<u64>>()
        .map_err(|e| format!("invalid run number '{sequence_number}': {e}"))?;

    let phase = match *flag {
        "True" => Phase::Warmup,
        "False" => Phase::Measured,
        other => return Err(format!("invalid warmup flag '{other}'")),
    };

    let seconds = timing
        .parse::<f64>()
        .map_err(|e| format!("invalid timing '{timing}': {e}"))?;

    let duration = Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("invalid timing '{timing}': {e}"))?;

    Ok(RunRecord::new(sequence_number, phase, duration))
}
