//!
//! The per-query execution time summary.
//!

use colored::Colorize;

use crate::model::benchmark::query::result::QueryResult;
use crate::model::benchmark::BenchmarkRun;

///
/// The per-query execution time summary.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The benchmark name.
    pub name: String,
    /// The summary rows, in input order.
    pub elements: Vec<Element>,
}

///
/// A single query row of the summary.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// The query identifier.
    pub query: i64,
    /// The number of iterations.
    pub iterations: usize,
    /// The minimum elapsed time, in seconds.
    pub execution_time: Option<f64>,
}

impl Summary {
    ///
    /// Returns the sum of the per-query execution times, in seconds.
    ///
    pub fn total_execution_time(&self) -> f64 {
        self.elements
            .iter()
            .filter_map(|element| element.execution_time)
            .sum()
    }
}

impl From<&BenchmarkRun> for Summary {
    fn from(run: &BenchmarkRun) -> Self {
        let elements = run
            .queries
            .iter()
            .map(|query| Element {
                query: query.query,
                iterations: query.iterations.len(),
                execution_time: query.execution_time(),
            })
            .collect();
        Self {
            name: run.context.name.clone(),
            elements,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} `{}`", "Benchmark".bright_white().bold(), self.name)?;
        writeln!(
            f,
            "{:>8} {:>10} {:>12}",
            "Query".bright_white().bold(),
            "Iterations".bright_white().bold(),
            "Minimum, ms".bright_white().bold(),
        )?;
        for element in self.elements.iter() {
            let execution_time = match element.execution_time {
                Some(seconds) => format!("{:.2}", seconds * QueryResult::MILLISECONDS_PER_SECOND),
                None => "-".to_owned(),
            };
            writeln!(
                f,
                "{:>8} {:>10} {:>12}",
                element.query, element.iterations, execution_time,
            )?;
        }
        writeln!(
            f,
            "{:>8} {:>10} {:>12}",
            "Total".bright_green().bold(),
            "",
            format!(
                "{:.2}",
                self.total_execution_time() * QueryResult::MILLISECONDS_PER_SECOND
            )
            .bright_green()
            .bold(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use super::Summary;
    use crate::model::benchmark::context::Context;
    use crate::model::benchmark::query::result::QueryResult;
    use crate::model::benchmark::query::QueryRun;
    use crate::model::benchmark::BenchmarkRun;

    #[test]
    fn from_run() {
        let context = Context::new(
            "1.0".to_owned(),
            "30.0".to_owned(),
            4,
            1000,
            vec!["mybench".to_owned()],
        )
        .expect("Always valid");
        let queries = vec![
            QueryRun::new(
                1,
                vec![QueryResult::new(0.5, 10), QueryResult::new(0.25, 10)],
                1000,
            )
            .expect("Always valid"),
            QueryRun::new(2, vec![QueryResult::new(1.0, 1)], 1001).expect("Always valid"),
        ];
        let run = BenchmarkRun::new(context, queries);

        let summary = Summary::from(&run);

        assert_eq!(summary.name, "mybench");
        assert_eq!(
            summary.elements,
            vec![
                Element {
                    query: 1,
                    iterations: 2,
                    execution_time: Some(0.25),
                },
                Element {
                    query: 2,
                    iterations: 1,
                    execution_time: Some(1.0),
                },
            ]
        );
        assert_eq!(summary.total_execution_time(), 1.25);
    }

    #[test]
    fn display() {
        colored::control::set_override(false);
        let summary = Summary {
            name: "mybench".to_owned(),
            elements: vec![Element {
                query: 7,
                iterations: 3,
                execution_time: Some(0.125),
            }],
        };

        let table = summary.to_string();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Benchmark `mybench`");
        assert_eq!(lines[2], "       7          3       125.00");
        assert_eq!(lines[3], "   Total                  125.00");
    }
}
