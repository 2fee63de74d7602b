//!
//! The line protocol rendering of a benchmark run.
//!

pub mod line;

use crate::model::benchmark::query::QueryRun;
use crate::model::benchmark::BenchmarkRun;

use self::line::Line;

///
/// The line protocol rendering of a benchmark run.
///
/// Lines are produced lazily, one per query iteration, in input order.
///
#[derive(Debug)]
pub struct LineProtocol<'a> {
    /// The measurement and the tags shared by every line.
    prefix: String,
    /// The rendered benchmark run.
    run: &'a BenchmarkRun,
}

impl LineProtocol<'_> {
    /// The measurement name.
    pub const MEASUREMENT: &'static str = "benchmark";

    ///
    /// Returns the measurement and the tags shared by every line.
    ///
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    ///
    /// Returns the lines of the whole run.
    ///
    pub fn lines<'b>(&'b self) -> impl Iterator<Item = Line<'b>> + 'b {
        let prefix: &'b str = self.prefix.as_str();
        let queries: &'b [QueryRun] = self.run.queries.as_slice();
        queries
            .iter()
            .flat_map(move |query| query_lines(prefix, query))
    }
}

///
/// Returns the lines of a single query run.
///
fn query_lines<'b>(prefix: &'b str, query: &'b QueryRun) -> impl Iterator<Item = Line<'b>> + 'b {
    let timestamp = query.timestamp_nanos();
    query
        .iterations
        .iter()
        .enumerate()
        .map(move |(iteration, result)| Line {
            prefix,
            query: query.query,
            iteration,
            row_count: result.row_count,
            elapsed_ms: result.elapsed_ms(),
            timestamp,
        })
}

impl<'a> From<&'a BenchmarkRun> for LineProtocol<'a> {
    fn from(run: &'a BenchmarkRun) -> Self {
        let context = &run.context;
        let prefix = format!(
            "{},name={},version={},datafusion_version={},num_cpus={}",
            Self::MEASUREMENT,
            context.name,
            context.benchmark_version,
            context.engine_version,
            context.num_cpus,
        );
        Self { prefix, run }
    }
}
