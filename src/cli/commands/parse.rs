//! Parse command implementation
//!
//! Parses a single cast and prints its metadata, resolved channels and any
//! diagnostics collected along the way.

use tracing::info;

use crate::cli::args::ParseArgs;
use crate::{Error, Result};

use super::shared::{build_parser, setup_logging};

/// Run the parse command
pub fn run_parse(args: ParseArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let parser = build_parser(args.rules.as_deref(), args.encoding, args.baltic)?;
    let cast = parser.parse_file(&args.file)?;

    info!("Parsed {}", cast.file_name);

    println!("File:      {}", cast.file_name);
    println!(
        "Valid:     {}",
        if cast.valid { "yes" } else { "no" }
    );
    println!(
        "Date:      {}",
        cast.timestamp
            .map(|t| t.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    match (cast.position.latitude(), cast.position.longitude()) {
        (Some(lat), Some(lon)) => println!("Position:  {:.5}, {:.5}", lat, lon),
        _ => println!("Position:  unknown"),
    }
    println!("Baltic:    {}", cast.baltic);

    if let Some(station) = &cast.iow.station {
        println!("Station:   {}", station);
    }
    if let Some(cruise) = &cast.iow.cruise_id {
        println!("Cruise:    {}", cruise);
    }

    println!("\nChannels ({}):", cast.channels.len());
    for channel in &cast.channels {
        println!(
            "  {:>3}  {:<16} -> {:<8} {}",
            channel.index,
            channel.raw_name,
            channel.standardized_id,
            channel.unit.as_deref().unwrap_or("")
        );
    }

    if let Some(records) = &cast.records {
        println!("\nRecords:   {} rows x {} columns", records.height(), records.width());
        if cast.diagnostics.rows_skipped > 0 {
            println!(
                "           {} of {} data rows accepted ({:.1}%), {} skipped",
                cast.diagnostics.rows_parsed,
                cast.diagnostics.data_lines_total,
                cast.diagnostics.row_success_rate(),
                cast.diagnostics.rows_skipped
            );
        }
    }

    if let Some(derived) = &cast.derived {
        println!("\nDerived fields:");
        for field in &derived.fields {
            println!("  {:<10} {} [{}]", field.name, field.description, field.unit);
        }
    }

    if !cast.diagnostics.warnings.is_empty() {
        println!("\nWarnings ({}):", cast.diagnostics.warnings.len());
        for warning in &cast.diagnostics.warnings {
            println!("  [{}] {}", warning.component, warning.message);
        }
    }

    if !cast.valid {
        return Err(Error::invalid_cast(
            cast.file_name,
            "file did not parse as a structurally sound CNV cast",
        ));
    }

    Ok(())
}
