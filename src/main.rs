//! CNV processor binary
//!
//! Thin entry point: parses CLI arguments, dispatches to the command
//! handlers and maps errors to a non-zero exit code.

use clap::{CommandFactory, Parser};

use cnv_processor::cli::args::Args;
use cnv_processor::cli::commands;

fn main() {
    let args = Args::parse();

    if args.command.is_none() {
        // No subcommand: show help and exit cleanly
        if let Err(error) = Args::command().print_help() {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
        println!();
        return;
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
