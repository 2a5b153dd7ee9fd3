//! Sinks for the ordered text the zoo produces.
//!
//! Keeper status lines, subscriber reactions, and resident actions all go
//! through one [`Transcript`], so their relative order is exactly the order
//! in which they were emitted.

use std::io::Write;

use crate::error::ZooError;

/// An ordered, line-oriented output sink.
pub trait Transcript {
    /// Append one line.
    fn emit(&mut self, line: &str) -> Result<(), ZooError>;
}

impl Transcript for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<(), ZooError> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// A transcript that writes each line, newline-terminated, to a writer.
#[derive(Debug)]
pub struct WriterTranscript<W> {
    inner: W,
    lines_written: u64,
}

impl<W: Write> WriterTranscript<W> {
    /// Wrap `inner`.
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }

    /// Number of lines written so far.
    pub const fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, ZooError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Transcript for WriterTranscript<W> {
    fn emit(&mut self, line: &str) -> Result<(), ZooError> {
        writeln!(self.inner, "{line}")?;
        self.lines_written = self.lines_written.saturating_add(1);
        Ok(())
    }
}
