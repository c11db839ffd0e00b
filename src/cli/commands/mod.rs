//! Command implementations for the CNV processor CLI
//!
//! Each command lives in its own module; `shared` holds the logging and
//! parser construction both commands use.

pub mod parse;
pub mod shared;
pub mod summary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the CNV processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `parse`: single-cast inspection with channels and diagnostics
/// - `summary`: one-line summaries for a file or a directory of casts
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Summary(summary_args) => summary::run_summary(summary_args),
    }
}
