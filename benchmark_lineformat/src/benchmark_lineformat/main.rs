//!
//! The benchmark line format converter binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(arguments.log_level())
        .format_timestamp(None)
        .init();

    let run = benchmark_lineformat::BenchmarkRun::try_from(arguments.baseline_path.as_path())?;
    log::info!(
        "Converting benchmark `{}` with {} queries",
        run.context.name,
        run.queries.len()
    );

    let protocol = benchmark_lineformat::LineProtocol::from(&run);
    let output = benchmark_lineformat::Output::from(arguments.output_path);
    let written = output.write(&protocol)?;

    if arguments.quiet {
        return Ok(());
    }
    if arguments.summary {
        eprint!("{}", benchmark_lineformat::Summary::from(&run));
    }
    eprintln!(
        "   {} {written} lines from {:?} => {output}",
        "Converted".bright_green().bold(),
        arguments.baseline_path,
    );

    Ok(())
}
