//!
//! Benchmark summary loading error.
//!

use std::path::PathBuf;

///
/// Benchmark summary loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist or cannot be read.
    #[error("Reading input file {path:?}: {error}")]
    NotFound {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The input file is not valid JSON.
    #[error("Parsing input file {path:?}: {error}")]
    Malformed {
        /// The underlying JSON syntax error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The input file is valid JSON, but not a benchmark summary.
    #[error("Invalid benchmark summary {path:?}: {error}")]
    Schema {
        /// The underlying JSON data error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Classifies a JSON error raised while loading the file at `path`.
    ///
    pub fn json(error: serde_json::Error, path: PathBuf) -> Self {
        match error.classify() {
            serde_json::error::Category::Data => Self::Schema { error, path },
            serde_json::error::Category::Io => Self::NotFound {
                error: error.into(),
                path,
            },
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                Self::Malformed { error, path }
            }
        }
    }
}
