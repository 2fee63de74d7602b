//!
//! The benchmark line format converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark line format converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Enables debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the terminal output, including the summary.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Prints the minimum execution time of each query after conversion.
    #[arg(short, long)]
    pub summary: bool,

    /// Path to the baseline summary file.
    pub baseline_path: PathBuf,

    /// Output file.
    /// The lines are written to the standard output if not specified.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Returns the logging level selected by the flags.
    ///
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Off
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
