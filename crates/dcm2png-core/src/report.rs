//! Per-file result reporting.
//!
//! One status line per conversion, written in enumeration order to any
//! writer. Verbosity is explicit configuration on the reporter; nothing
//! global is mutated to suppress failure detail.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use crate::types::ConversionResult;

/// Writes one status line per conversion result.
///
/// Purely observational: reporting has no effect on batch control flow.
pub struct Reporter<W: Write> {
    writer: W,
    total: usize,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter for a batch of `total` files.
    pub fn new(writer: W, total: usize, verbose: bool) -> Self {
        Self {
            writer,
            total,
            verbose,
        }
    }

    /// Report the result at `index` (zero-based enumeration position).
    ///
    /// Success lines name the output file; failures print a terse
    /// `failed`, with the reason on an indented second line when verbose.
    pub fn report(&mut self, index: usize, result: &ConversionResult) -> io::Result<()> {
        let input = file_name(&result.input);
        match &result.outcome {
            Ok(output) => writeln!(
                self.writer,
                "{}/{}: {} -> {}",
                index + 1,
                self.total,
                input,
                file_name(output),
            ),
            Err(err) => {
                writeln!(
                    self.writer,
                    "{}/{}: {} -> failed",
                    index + 1,
                    self.total,
                    input,
                )?;
                if self.verbose {
                    writeln!(self.writer, "  {err}")?;
                }
                Ok(())
            }
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Display a path by its final component.
fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
