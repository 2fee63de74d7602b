//!
//! A single line protocol record.
//!

///
/// A single line protocol record, one per query iteration.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    /// The pre-rendered measurement and tag set.
    pub prefix: &'a str,
    /// The query identifier.
    pub query: i64,
    /// The zero-based iteration index within the query run.
    pub iteration: usize,
    /// The number of rows returned by the iteration.
    pub row_count: u64,
    /// The elapsed time, already rounded to whole milliseconds.
    pub elapsed_ms: f64,
    /// The query start time, in Unix nanoseconds.
    pub timestamp: i128,
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            prefix,
            query,
            iteration,
            row_count,
            elapsed_ms,
            timestamp,
        } = self;
        write!(
            f,
            r#"{prefix} query="{query}",iteration={iteration},row_count={row_count},elapsed_ms={elapsed_ms:.0} {timestamp}"#
        )
    }
}
