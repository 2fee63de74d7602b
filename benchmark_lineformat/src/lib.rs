//!
//! The benchmark line format converter library.
//!

pub mod input;
pub mod model;
pub mod output;

pub use self::input::error::Error as InputError;
pub use self::model::benchmark::context::Context;
pub use self::model::benchmark::query::result::QueryResult;
pub use self::model::benchmark::query::QueryRun;
pub use self::model::benchmark::BenchmarkRun;
pub use self::model::error::Error as SchemaError;
pub use self::output::error::Error as OutputError;
pub use self::output::line_protocol::line::Line;
pub use self::output::line_protocol::LineProtocol;
pub use self::output::summary::Summary;
pub use self::output::writer::LineWriter;
pub use self::output::Output;
