//!
//! The benchmark run context.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as SchemaError;

///
/// The benchmark run context.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedContext")]
pub struct Context {
    /// The benchmark harness version.
    pub benchmark_version: String,
    /// The query engine version.
    #[serde(rename = "datafusion_version")]
    pub engine_version: String,
    /// The number of CPUs available to the engine.
    pub num_cpus: u32,
    /// The run start time, in Unix seconds.
    pub start_time: i64,
    /// The command-line arguments the harness was invoked with.
    pub arguments: Vec<String>,
    /// The benchmark name, that is the first command-line argument.
    #[serde(skip_serializing)]
    pub name: String,
}

impl Context {
    ///
    /// Creates the context, deriving the benchmark name from the arguments.
    ///
    pub fn new(
        benchmark_version: String,
        engine_version: String,
        num_cpus: u32,
        start_time: i64,
        arguments: Vec<String>,
    ) -> Result<Self, SchemaError> {
        if num_cpus == 0 {
            return Err(SchemaError::ZeroCpus);
        }
        let name = arguments
            .first()
            .cloned()
            .ok_or(SchemaError::EmptyArguments)?;

        Ok(Self {
            benchmark_version,
            engine_version,
            num_cpus,
            start_time,
            arguments,
            name,
        })
    }
}

///
/// The context as it appears in the summary file, before the name is derived.
///
#[derive(Debug, Deserialize)]
struct UncheckedContext {
    benchmark_version: String,
    datafusion_version: String,
    num_cpus: u32,
    start_time: i64,
    arguments: Vec<String>,
}

impl TryFrom<UncheckedContext> for Context {
    type Error = SchemaError;

    fn try_from(context: UncheckedContext) -> Result<Self, Self::Error> {
        Self::new(
            context.benchmark_version,
            context.datafusion_version,
            context.num_cpus,
            context.start_time,
            context.arguments,
        )
    }
}
