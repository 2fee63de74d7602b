//!
//! Line protocol writer.
//!

use std::io::Write;

use crate::output::line_protocol::line::Line;

///
/// Writes line protocol records to any [`Write`]r, one per line.
///
pub struct LineWriter<W>
where
    W: Write,
{
    /// The underlying writer.
    writer: W,
    /// The number of lines written so far.
    written: usize,
}

impl<W> LineWriter<W>
where
    W: Write,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    ///
    /// Writes a single newline-terminated record.
    ///
    pub fn write_line(&mut self, line: &Line<'_>) -> std::io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.written += 1;
        Ok(())
    }

    ///
    /// Writes all records in order, stopping at the first failure.
    ///
    pub fn write_all<'a, I>(&mut self, lines: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = Line<'a>>,
    {
        for line in lines {
            self.write_line(&line)?;
        }
        Ok(())
    }

    ///
    /// Flushes the underlying writer and returns the number of lines written.
    ///
    pub fn finish(mut self) -> std::io::Result<usize> {
        self.writer.flush()?;
        Ok(self.written)
    }
}
