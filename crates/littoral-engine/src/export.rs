//! Comma-separated export of sweep records.
//!
//! Output goes to any [`Write`]; opening files is the caller's concern.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use crate::sweep::SweepRecord;

/// Header line written before the records.
pub const CSV_HEADER: &str = "p,invasion_steps,invasion_elapsed_s,fraction_touched,diffusion_steps,diffusion_elapsed_s,total_elapsed_s";

/// Failure while writing records.
#[derive(Debug)]
pub enum ExportError {
    /// The underlying writer failed.
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "export write failed: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Round half-to-even at `digits` decimal places. Normalises `-0` to `0`.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale + 0.0
}

/// Write [`CSV_HEADER`] and one line per record.
///
/// `p` is rounded to 2 decimal places, `fraction_touched` to 4, and
/// elapsed times are printed in seconds with millisecond precision.
pub fn write_csv<W: Write>(records: &[SweepRecord], mut out: W) -> Result<(), ExportError> {
    writeln!(out, "{CSV_HEADER}")?;
    for r in records {
        writeln!(
            out,
            "{},{},{:.3},{},{},{:.3},{:.3}",
            round_to(r.p, 2),
            r.invasion_steps,
            r.invasion_secs,
            round_to(r.fraction_touched, 4),
            r.diffusion_steps,
            r.diffusion_secs,
            r.total_secs,
        )?;
    }
    out.flush()?;
    Ok(())
}
