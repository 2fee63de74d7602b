//!
//! The repeated-measurement results of a single benchmark query.
//!

pub mod result;

use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as SchemaError;

use self::result::QueryResult;

///
/// The repeated-measurement results of a single benchmark query.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedQueryRun")]
pub struct QueryRun {
    /// The query identifier.
    pub query: i64,
    /// The measurements, one per iteration, never empty.
    pub iterations: Vec<QueryResult>,
    /// The query start time, in Unix seconds.
    pub start_time: i64,
}

impl QueryRun {
    /// The number of nanoseconds in a second.
    pub const NANOSECONDS_PER_SECOND: i128 = 1_000_000_000;

    ///
    /// Creates a query run, rejecting runs without measurements.
    ///
    pub fn new(
        query: i64,
        iterations: Vec<QueryResult>,
        start_time: i64,
    ) -> Result<Self, SchemaError> {
        if iterations.is_empty() {
            return Err(SchemaError::EmptyIterations { query });
        }
        Ok(Self {
            query,
            iterations,
            start_time,
        })
    }

    ///
    /// Returns the minimum elapsed time across the iterations, in seconds.
    ///
    /// The minimum filters out the noise of whatever else the system was doing.
    /// `None` if there are no iterations.
    ///
    pub fn execution_time(&self) -> Option<f64> {
        self.iterations
            .iter()
            .map(|iteration| iteration.elapsed)
            .reduce(f64::min)
    }

    ///
    /// Returns the start time in Unix nanoseconds.
    ///
    pub fn timestamp_nanos(&self) -> i128 {
        i128::from(self.start_time) * Self::NANOSECONDS_PER_SECOND
    }
}

///
/// The query run as it appears in the summary file.
///
#[derive(Debug, Deserialize)]
struct UncheckedQueryRun {
    query: i64,
    iterations: Vec<QueryResult>,
    start_time: i64,
}

impl TryFrom<UncheckedQueryRun> for QueryRun {
    type Error = SchemaError;

    fn try_from(run: UncheckedQueryRun) -> Result<Self, Self::Error> {
        Self::new(run.query, run.iterations, run.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::QueryResult;
    use super::QueryRun;
    use crate::model::error::Error as SchemaError;

    fn run(elapsed: &[f64]) -> QueryRun {
        let iterations = elapsed
            .iter()
            .map(|elapsed| QueryResult::new(*elapsed, 10))
            .collect();
        QueryRun::new(1, iterations, 1000).expect("Always valid")
    }

    #[test]
    fn execution_time_is_minimum() {
        let run = run(&[0.07, 0.05, 0.3]);

        let execution_time = run.execution_time().expect("Always exists");
        assert_eq!(execution_time, 0.05);
        assert!(run
            .iterations
            .iter()
            .all(|iteration| execution_time <= iteration.elapsed));
    }

    #[test]
    fn execution_time_single_iteration() {
        assert_eq!(run(&[1.25]).execution_time(), Some(1.25));
    }

    #[test]
    fn execution_time_without_iterations() {
        let run = QueryRun {
            query: 1,
            iterations: vec![],
            start_time: 0,
        };

        assert_eq!(run.execution_time(), None);
    }

    #[test]
    fn error_empty_iterations() {
        assert_eq!(
            QueryRun::new(7, vec![], 1000),
            Err(SchemaError::EmptyIterations { query: 7 })
        );

        let error = serde_json::from_str::<QueryRun>(
            r#"{ "query": 7, "start_time": 1000, "iterations": [] }"#,
        )
        .expect_err("Must fail");
        assert!(error.is_data());
        assert!(error.to_string().contains("query 7 has no `iterations`"));
    }

    #[test]
    fn timestamp_nanos() {
        let mut run = run(&[0.1]);

        run.start_time = 1_700_000_000;
        assert_eq!(run.timestamp_nanos(), 1_700_000_000_000_000_000);

        run.start_time = i64::MAX;
        assert_eq!(
            run.timestamp_nanos(),
            i128::from(i64::MAX) * 1_000_000_000
        );
    }
}
