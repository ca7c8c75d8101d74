//! The line transformer: one output line per input line, in order.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::TransformError;
use crate::number::{coerce, double, render};

/// Transform a single line (terminator already stripped) into its output
/// text.
pub fn process(line: &str) -> String {
    render(double(coerce(line)))
}

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read and written.
    pub lines: u64,
    /// Lines that did not parse and were written as `NaN`.
    pub sentinels: u64,
}

/// Reads lines from `input` until end-of-file and writes each one doubled to
/// `output`.
///
/// Every output line is flushed before the next input line is read, so the
/// transformer can sit in an interactive pipe without buffering answers.
pub struct LineTransformer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTransformer<R, W> {
    /// Wrap an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Process the whole input stream.
    ///
    /// Lines are split on `\n`; a `\r` right before it is dropped, and a last
    /// line without a terminator still counts. Bytes that are not UTF-8 are
    /// replaced, which makes the line non-numeric rather than an error.
    pub fn run(&mut self) -> Result<Summary, TransformError> {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let line_no = summary.lines + 1;

            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .map_err(|source| TransformError::Read {
                    line: line_no,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let text = String::from_utf8_lossy(strip_terminator(&buf));
            let value = coerce(&text);
            if value.is_nan() {
                summary.sentinels += 1;
                debug!(line = line_no, text = %text, "line is not a number");
            }

            let rendered = render(double(value));
            writeln!(self.output, "{rendered}")
                .and_then(|()| self.output.flush())
                .map_err(|source| TransformError::Write {
                    line: line_no,
                    source,
                })?;

            summary.lines += 1;
        }

        debug!(
            lines = summary.lines,
            sentinels = summary.sentinels,
            "end of input"
        );
        Ok(summary)
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
