//! Command-line argument definitions for the CNV processor
//!
//! Defines the complete CLI interface using the clap derive API.

use crate::config::TextEncoding;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CNV processor
///
/// Parses Seabird CNV oceanographic CTD cast files: inspects single casts
/// and produces one-line summaries of whole cast archives.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cnv-processor",
    version,
    about = "Parse Seabird CNV oceanographic CTD cast files",
    long_about = "Parses Seabird CNV cast files (free-form ASCII header plus numeric data \
                  block), including the IOW cruise/station metadata dialect, standardized \
                  channel naming, and Baltic Sea classification. Inspects single casts or \
                  summarizes whole archives one line per cast."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the CNV processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a single cast and print its metadata, channels and diagnostics
    Parse(ParseArgs),
    /// Print one-line summaries for a cast file or a directory of casts
    Summary(SummaryArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// CNV cast file to parse
    #[arg(value_name = "FILE", help = "CNV cast file to parse")]
    pub file: PathBuf,

    /// Naming-rule file overriding the built-in rule set
    ///
    /// YAML file mapping standardized identifiers to raw-name candidates.
    /// If not specified, the rule set shipped with the crate is used.
    #[arg(
        short = 'r',
        long = "rules",
        value_name = "FILE",
        help = "Naming-rule file (YAML), overrides the built-in rules"
    )]
    pub rules: Option<PathBuf>,

    /// Declared text encoding of the input file
    #[arg(
        long = "encoding",
        value_enum,
        default_value = "latin1",
        help = "Text encoding of the input file"
    )]
    pub encoding: TextEncoding,

    /// Force the Baltic classification instead of deriving it from the
    /// parsed position
    #[arg(
        long = "baltic",
        value_name = "BOOL",
        help = "Force the Baltic flag (true/false) instead of classifying by position"
    )]
    pub baltic: Option<bool>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Cast file or directory to summarize
    ///
    /// A directory is scanned recursively for `.cnv` files, which are
    /// summarized in path order.
    #[arg(value_name = "PATH", help = "CNV cast file or directory of casts")]
    pub path: PathBuf,

    /// Print the column header line before the summaries
    #[arg(long = "header", help = "Print the column header line first")]
    pub header: bool,

    /// Naming-rule file overriding the built-in rule set
    #[arg(
        short = 'r',
        long = "rules",
        value_name = "FILE",
        help = "Naming-rule file (YAML), overrides the built-in rules"
    )]
    pub rules: Option<PathBuf>,

    /// Declared text encoding of the input files
    #[arg(
        long = "encoding",
        value_enum,
        default_value = "latin1",
        help = "Text encoding of the input files"
    )]
    pub encoding: TextEncoding,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.file.display()
            )));
        }

        if let Some(rules) = &self.rules {
            if !rules.exists() {
                return Err(Error::configuration(format!(
                    "Naming-rule file does not exist: {}",
                    rules.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.path.display()
            )));
        }

        if let Some(rules) = &self.rules {
            if !rules.exists() {
                return Err(Error::configuration(format!(
                    "Naming-rule file does not exist: {}",
                    rules.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("cast.cnv");
        std::fs::write(&file, "*END*\n").unwrap();

        let args = ParseArgs {
            file: file.clone(),
            rules: None,
            encoding: TextEncoding::Latin1,
            baltic: None,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut invalid_args = args.clone();
        invalid_args.file = PathBuf::from("/nonexistent/cast.cnv");
        assert!(invalid_args.validate().is_err());

        let mut invalid_args = args;
        invalid_args.rules = Some(PathBuf::from("/nonexistent/rules.yaml"));
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_summary_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = SummaryArgs {
            path: temp_dir.path().to_path_buf(),
            header: false,
            rules: None,
            encoding: TextEncoding::Latin1,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut invalid_args = args;
        invalid_args.path = PathBuf::from("/nonexistent/casts");
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = ParseArgs {
            file: PathBuf::from("cast.cnv"),
            rules: None,
            encoding: TextEncoding::Latin1,
            baltic: None,
            verbose: 0,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");
    }
}
