//!
//! Line protocol output error.
//!

///
/// Line protocol output error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output destination cannot be created.
    #[error("Creating output file {path:?}: {error}")]
    Creating {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: std::path::PathBuf,
    },
    /// The output destination cannot be written, e.g. a closed pipe.
    #[error("Writing to {destination}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The human-readable destination description.
        destination: String,
    },
}
