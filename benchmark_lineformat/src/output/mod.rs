//!
//! Benchmark line format output.
//!

pub mod error;
pub mod line_protocol;
pub mod summary;
pub mod writer;

use std::io::Write;
use std::path::PathBuf;

use self::error::Error as OutputError;
use self::line_protocol::LineProtocol;
use self::writer::LineWriter;

///
/// The line protocol destination.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The process standard output.
    Stdout,
    /// A file, truncated if it exists.
    File(PathBuf),
}

impl Output {
    ///
    /// Writes all lines of the benchmark run, returning the number of lines written.
    ///
    /// Lines written before a failure stay written.
    ///
    pub fn write(&self, protocol: &LineProtocol<'_>) -> Result<usize, OutputError> {
        let written = match self {
            Self::Stdout => {
                let stdout = std::io::stdout().lock();
                self.write_to(std::io::BufWriter::new(stdout), protocol)?
            }
            Self::File(path) => {
                let file =
                    std::fs::File::create(path.as_path()).map_err(|error| OutputError::Creating {
                        error,
                        path: path.to_owned(),
                    })?;
                self.write_to(std::io::BufWriter::new(file), protocol)?
            }
        };
        log::debug!("Written {written} lines to {self}");
        Ok(written)
    }

    ///
    /// Writes all lines of the benchmark run to an arbitrary writer.
    ///
    fn write_to<W>(&self, writer: W, protocol: &LineProtocol<'_>) -> Result<usize, OutputError>
    where
        W: Write,
    {
        let mut writer = LineWriter::new(writer);
        writer
            .write_all(protocol.lines())
            .and_then(|()| writer.finish())
            .map_err(|error| OutputError::Writing {
                error,
                destination: self.to_string(),
            })
    }
}

impl From<Option<PathBuf>> for Output {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::File(path) => write!(f, "{path:?}"),
        }
    }
}
