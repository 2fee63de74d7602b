//!
//! A single iteration of a benchmark query.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single iteration of a benchmark query.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The wall-clock time, in seconds.
    pub elapsed: f64,
    /// The number of rows returned.
    pub row_count: u64,
}

impl QueryResult {
    /// The number of milliseconds in a second.
    pub const MILLISECONDS_PER_SECOND: f64 = 1000.0;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(elapsed: f64, row_count: u64) -> Self {
        Self { elapsed, row_count }
    }

    ///
    /// Returns the elapsed time in whole milliseconds.
    ///
    /// Halfway cases are rounded to the even neighbour, so `62.5` becomes `62`
    /// and `187.5` becomes `188`.
    ///
    pub fn elapsed_ms(&self) -> f64 {
        (self.elapsed * Self::MILLISECONDS_PER_SECOND).round_ties_even()
    }
}
