//! Summary command implementation
//!
//! Prints the one-line cast summary for a single file, or for every `.cnv`
//! file under a directory in path order. Invalid casts are logged and
//! skipped; they never abort the run.

use std::path::PathBuf;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::Result;
use crate::app::services::cnv_parser::CnvCast;
use crate::cli::args::SummaryArgs;
use crate::constants::CNV_FILE_EXTENSION;

use super::shared::{build_parser, setup_logging};

/// Run the summary command
pub fn run_summary(args: SummaryArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let parser = build_parser(args.rules.as_deref(), args.encoding, None)?;

    let files = collect_cast_files(&args)?;
    debug!("Summarizing {} cast file(s)", files.len());

    if args.header {
        println!("{}", CnvCast::summary_header_line());
    }

    for file in files {
        let cast = parser.parse_file(&file)?;
        if !cast.valid {
            warn!("Skipping invalid cast {}", file.display());
            continue;
        }
        println!("{}", cast.summary_line());
    }

    Ok(())
}

/// Resolve the input path to the list of cast files to summarize.
///
/// A single file is taken as-is regardless of extension; a directory is
/// walked recursively for `.cnv` files, sorted by path for stable output.
fn collect_cast_files(args: &SummaryArgs) -> Result<Vec<PathBuf>> {
    if args.path.is_file() {
        return Ok(vec![args.path.clone()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&args.path) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_cnv = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(CNV_FILE_EXTENSION))
            .unwrap_or(false);
        if is_cnv {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
