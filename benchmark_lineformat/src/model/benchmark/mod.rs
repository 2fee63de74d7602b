//!
//! The benchmark run representation.
//!

pub mod context;
pub mod query;

use serde::Deserialize;
use serde::Serialize;

use self::context::Context;
use self::query::QueryRun;

///
/// The benchmark run representation.
///
/// Produced by the benchmarking harness once per suite execution.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// The run metadata.
    pub context: Context,
    /// The per-query results, in the order they were executed.
    pub queries: Vec<QueryRun>,
}

impl BenchmarkRun {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(context: Context, queries: Vec<QueryRun>) -> Self {
        Self { context, queries }
    }

    ///
    /// Returns the total number of iterations across all queries.
    ///
    pub fn iteration_count(&self) -> usize {
        self.queries
            .iter()
            .map(|query| query.iterations.len())
            .sum()
    }
}
