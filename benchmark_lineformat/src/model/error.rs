//!
//! Benchmark summary schema violations.
//!

///
/// Benchmark summary schema violation, detected after the JSON shape has been accepted.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The run context has no command-line arguments to derive the benchmark name from.
    #[error("context `arguments` must contain at least the benchmark name")]
    EmptyArguments,
    /// The run context reports no CPUs.
    #[error("context `num_cpus` must be at least 1")]
    ZeroCpus,
    /// The query run has no measurements.
    #[error("query {query} has no `iterations`")]
    EmptyIterations {
        /// The query identifier.
        query: i64,
    },
}
