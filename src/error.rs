//! Error types for the line transform.

use std::io;
use thiserror::Error;

/// Errors that can stop a transform run.
///
/// Malformed input is not in here: it is coerced to `NaN` and written out
/// like any other value.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Reading the next line from the input stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing an output line failed.
    #[error("failed to write line {line}: {source}")]
    Write {
        line: u64,
        #[source]
        source: io::Error,
    },
}

impl TransformError {
    /// True when the output side went away (e.g. `doubler | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TransformError::Write { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}
