//!
//! Benchmark summary input.
//!

pub mod error;

use std::path::Path;

use crate::model::benchmark::BenchmarkRun;

use self::error::Error as InputError;

impl TryFrom<&Path> for BenchmarkRun {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let bytes = std::fs::read(path).map_err(|error| InputError::NotFound {
            error,
            path: path.to_path_buf(),
        })?;
        let run: Self = serde_json::from_slice(bytes.as_slice())
            .map_err(|error| InputError::json(error, path.to_path_buf()))?;
        log::debug!(
            "Loaded {} queries with {} iterations from {path:?}",
            run.queries.len(),
            run.iteration_count(),
        );
        Ok(run)
    }
}
